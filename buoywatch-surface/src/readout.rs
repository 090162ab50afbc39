// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The textual readout: three fixed display slots plus an optional
/// connectivity slot.
///
/// Values arrive preformatted; the readout stores whatever text it is
/// given, including the renderings of non-finite numbers.
pub trait Readout {
    /// Writes the latitude slot.
    fn set_latitude(&mut self, text: String);

    /// Writes the longitude slot.
    fn set_longitude(&mut self, text: String);

    /// Writes the fluorescence slot.
    fn set_fluorescence(&mut self, text: String);

    /// Writes the connectivity indicator slot.
    ///
    /// Only called when the indicator is enabled; the text is never
    /// revised on failure.
    fn set_status(&mut self, text: String);
}

/// In-memory readout retaining the last written text per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextReadout {
    /// Last text written to the latitude slot
    pub latitude: String,
    /// Last text written to the longitude slot
    pub longitude: String,
    /// Last text written to the fluorescence slot
    pub fluorescence: String,
    /// Last text written to the status slot, `None` until first written
    pub status: Option<String>,
}

impl TextReadout {
    /// Creates a readout with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Readout for TextReadout {
    fn set_latitude(&mut self, text: String) {
        self.latitude = text;
    }

    fn set_longitude(&mut self, text: String) {
        self.longitude = text;
    }

    fn set_fluorescence(&mut self, text: String) {
        self.fluorescence = text;
    }

    fn set_status(&mut self, text: String) {
        self.status = Some(text);
    }
}
