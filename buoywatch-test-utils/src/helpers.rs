use futures::Stream;
use futures::stream::StreamExt;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_item_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!(
                "Unexpected item emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
