//! Value resolution through the optional transform callback.
//!
//! A callback may answer with a plain value, a future, or a stream. All three
//! collapse into a [`Resolution`]: either a value available right now, or a
//! boxed future delivering exactly one value once.

use super::MetaError;
use futures::{FutureExt, StreamExt, future::BoxFuture, stream::BoxStream};
use std::future::Future;

/// Output of a deferred transform. `Ok(None)` is a null result.
pub type TransformResult = anyhow::Result<Option<String>>;

/// What a transform callback hands back.
///
/// Build it from the capability the producer has, not from its concrete
/// type: [`Transformed::future`] takes anything awaitable,
/// [`Transformed::stream`] anything that yields values over time.
pub enum Transformed {
    Value(Option<String>),
    Future(BoxFuture<'static, TransformResult>),
    Stream(BoxStream<'static, TransformResult>),
}

impl Transformed {
    /// A null result: nothing gets written for tags.
    pub fn null() -> Self {
        Self::Value(None)
    }

    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = TransformResult> + Send + 'static,
    {
        Self::Future(future.boxed())
    }

    /// Only the first item of the stream is used.
    pub fn stream<S>(stream: S) -> Self
    where
        S: futures::Stream<Item = TransformResult> + Send + 'static,
    {
        Self::Stream(stream.boxed())
    }
}

impl From<String> for Transformed {
    fn from(value: String) -> Self {
        Self::Value(Some(value))
    }
}

impl From<&str> for Transformed {
    fn from(value: &str) -> Self {
        Self::Value(Some(value.to_owned()))
    }
}

impl From<Option<String>> for Transformed {
    fn from(value: Option<String>) -> Self {
        Self::Value(value)
    }
}

/// A value that is either ready or will be delivered once.
pub enum Resolution {
    Immediate(Option<String>),
    Deferred(BoxFuture<'static, Result<Option<String>, MetaError>>),
}

impl Resolution {
    /// Wrap a value untouched (no callback involved).
    #[inline]
    pub fn verbatim(value: impl Into<String>) -> Self {
        Self::Immediate(Some(value.into()))
    }

    /// Run `value` through the callback, if any, and normalize the answer.
    pub fn resolve<F>(callback: Option<&F>, value: &str) -> Self
    where
        F: Fn(&str) -> Transformed + ?Sized,
    {
        match callback {
            Some(callback) => Self::from_transformed(value, callback(value)),
            None => Self::verbatim(value),
        }
    }

    fn from_transformed(input: &str, transformed: Transformed) -> Self {
        let input = input.to_owned();
        let fail = |source| MetaError::Transform { input, source };

        match transformed {
            Transformed::Value(value) => Self::Immediate(value),
            Transformed::Future(future) => {
                Self::Deferred(async move { future.await.map_err(fail) }.boxed())
            }
            Transformed::Stream(mut stream) => Self::Deferred(
                async move {
                    match stream.next().await {
                        Some(first) => first.map_err(fail),
                        None => Ok(None),
                    }
                }
                .boxed(),
            ),
        }
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Continue with the resolved value.
    ///
    /// Immediate values run `next` synchronously, so its errors surface to
    /// the caller right away; deferred values run it once they arrive.
    pub fn and_then<F>(self, next: F) -> Result<Self, MetaError>
    where
        F: FnOnce(Option<String>) -> Result<Self, MetaError> + Send + 'static,
    {
        match self {
            Self::Immediate(value) => next(value),
            Self::Deferred(future) => Ok(Self::Deferred(
                async move { next(future.await?)?.into_value().await }.boxed(),
            )),
        }
    }

    pub async fn into_value(self) -> Result<Option<String>, MetaError> {
        match self {
            Self::Immediate(value) => Ok(value),
            Self::Deferred(future) => future.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{executor::block_on, stream};
    use std::sync::Arc;

    type Cb = Arc<dyn Fn(&str) -> Transformed + Send + Sync>;

    fn resolve(callback: Option<&Cb>, value: &str) -> Resolution {
        Resolution::resolve(callback.map(|cb| &**cb), value)
    }

    #[test]
    fn test_no_callback_yields_value_verbatim() {
        for value in ["", "Home", "og:locale", "a - b"] {
            match resolve(None, value) {
                Resolution::Immediate(Some(resolved)) => assert_eq!(resolved, value),
                _ => panic!("expected immediate value"),
            }
        }
    }

    #[test]
    fn test_plain_value_callback_is_immediate() {
        let cb: Cb = Arc::new(|v: &str| Transformed::from(format!("[{v}]")));
        let resolution = resolve(Some(&cb), "Home");
        assert!(!resolution.is_deferred());
        let value = block_on(resolution.into_value()).unwrap();
        assert_eq!(value.as_deref(), Some("[Home]"));
    }

    #[test]
    fn test_future_callback_is_deferred() {
        let cb: Cb = Arc::new(|v: &str| {
            let v = v.to_uppercase();
            Transformed::future(async move { Ok(Some(v)) })
        });
        let resolution = resolve(Some(&cb), "home");
        assert!(resolution.is_deferred());
        let value = block_on(resolution.into_value()).unwrap();
        assert_eq!(value.as_deref(), Some("HOME"));
    }

    #[test]
    fn test_stream_callback_takes_first_item_only() {
        let cb: Cb = Arc::new(|_: &str| {
            Transformed::stream(stream::iter(vec![
                Ok(Some("first".to_string())),
                Ok(Some("second".to_string())),
            ]))
        });
        let value = block_on(resolve(Some(&cb), "x").into_value()).unwrap();
        assert_eq!(value.as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        let cb: Cb = Arc::new(|_: &str| Transformed::stream(stream::empty()));
        assert_eq!(block_on(resolve(Some(&cb), "x").into_value()).unwrap(), None);
    }

    #[test]
    fn test_failed_future_maps_to_transform_error() {
        let cb: Cb = Arc::new(|_: &str| {
            Transformed::future(async { Err(anyhow::anyhow!("offline")) })
        });
        let err = block_on(resolve(Some(&cb), "Home").into_value()).unwrap_err();
        assert!(matches!(err, MetaError::Transform { ref input, .. } if input == "Home"));
    }

    #[test]
    fn test_and_then_runs_synchronously_for_immediate() {
        let result =
            Resolution::verbatim("a").and_then(|_| Err(MetaError::Configuration("x".into())));
        assert!(matches!(result, Err(MetaError::Configuration(_))));
    }

    #[test]
    fn test_and_then_chains_deferred() {
        let cb: Cb = Arc::new(|v: &str| {
            let v = v.to_owned();
            Transformed::future(async move { Ok(Some(v)) })
        });
        let chained = resolve(Some(&cb), "a")
            .and_then(|v| Ok(Resolution::Immediate(v.map(|v| v + "b"))))
            .unwrap();
        assert!(chained.is_deferred());
        let value = block_on(chained.into_value()).unwrap();
        assert_eq!(value.as_deref(), Some("ab"));
    }
}
