//! Link layer trait

use crate::error::DlmsResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Link layer envelope over a physical connection to a meter
///
/// Implementations own framing, retries and timeouts. Each call may fail
/// with a transport error (`DlmsError::Connection`, `DlmsError::Timeout`,
/// `DlmsError::Protocol`).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait LinkLayer: Send {
    /// Establish the link
    async fn connect(&mut self) -> DlmsResult<()>;

    /// Tear the link down
    async fn disconnect(&mut self) -> DlmsResult<()>;

    /// Send one request
    async fn send(&mut self, data: &[u8]) -> DlmsResult<()>;

    /// Read one complete response, with link framing removed
    async fn read(&mut self) -> DlmsResult<Bytes>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DlmsError;

    async fn exchange<L: LinkLayer>(link: &mut L, request: &[u8]) -> DlmsResult<Bytes> {
        link.connect().await?;
        link.send(request).await?;
        let response = link.read().await;
        link.disconnect().await?;
        response
    }

    #[tokio::test]
    async fn test_exchange_through_link() {
        let mut link = MockLinkLayer::new();
        link.expect_connect().times(1).returning(|| Ok(()));
        link.expect_send().times(1).returning(|data| {
            assert_eq!(data.to_vec(), vec![0xC0, 0x01]);
            Ok(())
        });
        link.expect_read()
            .times(1)
            .returning(|| Ok(Bytes::from_static(&[0x11, 0x2A])));
        link.expect_disconnect().times(1).returning(|| Ok(()));

        let response = exchange(&mut link, &[0xC0, 0x01]).await.unwrap();
        assert_eq!(response.as_ref(), &[0x11, 0x2A]);
    }

    #[tokio::test]
    async fn test_read_error_still_disconnects() {
        let mut link = MockLinkLayer::new();
        link.expect_connect().returning(|| Ok(()));
        link.expect_send().returning(|_| Ok(()));
        link.expect_read().returning(|| Err(DlmsError::Timeout));
        link.expect_disconnect().times(1).returning(|| Ok(()));

        assert!(matches!(
            exchange(&mut link, &[0xC0]).await,
            Err(DlmsError::Timeout)
        ));
    }
}
