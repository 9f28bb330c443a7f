use std::error::Error;

/// Runs `supplier`, erasing the concrete type of any error it returns.
///
/// Callers that only need to propagate a failure can `?` the result into any
/// `anyhow::Result` without naming the supplier's error type. The error carries
/// the context `unchecked supplier failed`; the supplier's own error stays
/// reachable through `downcast_ref` and `root_cause`.
///
/// ```
/// use seqview::lang::unchecked;
///
/// let parsed = unchecked(|| "42".parse::<u32>());
/// assert_eq!(parsed.unwrap(), 42);
///
/// let failed = unchecked(|| "x".parse::<u32>()).unwrap_err();
/// assert!(failed.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
pub fn unchecked<T, E, F>(supplier: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Error + Send + Sync + 'static,
{
    supplier().map_err(|error| {
        tracing::debug!(%error, "erasing supplier error");
        anyhow::Error::new(error).context("unchecked supplier failed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn value_passes_through() -> anyhow::Result<()> {
        let value = unchecked(|| Ok::<_, io::Error>("foo"))?;
        assert_eq!(value, "foo");
        Ok(())
    }

    #[test]
    fn error_keeps_source() {
        let error = unchecked(|| Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "missing"))).unwrap_err();

        assert_eq!(error.to_string(), "unchecked supplier failed");
        assert_eq!(error.root_cause().to_string(), "missing");
        let source = error.downcast_ref::<io::Error>().map(io::Error::kind);
        assert_eq!(source, Some(io::ErrorKind::NotFound));
    }
}
