use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::time::timeout;

/// Upper bound on every network wait in this crate. Connects, sends and
/// stream writes all run under it, so no control request can hang its
/// handler past a small fixed window.
pub(crate) const IO_TIMEOUT: Duration = Duration::from_secs(1);

/// Runs `operation` under [`IO_TIMEOUT`], turning expiry into a regular
/// `TimedOut` I/O error.
pub(crate) async fn bounded<T, F>(operation: F) -> io::Result<T>
where
    F: Future<Output = io::Result<T>>,
{
    match timeout(IO_TIMEOUT, operation).await {
        Ok(result) => result,
        Err(_elapsed) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            "network operation exceeded its time bound",
        )),
    }
}
