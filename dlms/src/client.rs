//! Reading decoded responses through a link layer

use dlms_axdr::{AxdrDecoder, DecoderSettings};
use dlms_core::{DlmsResult, ValueNode};
use dlms_transport::LinkLayer;

/// Sends pre-encoded requests over a link and decodes each response
#[derive(Debug)]
pub struct ResponseReader<L: LinkLayer> {
    link: L,
    decoder: AxdrDecoder,
}

impl<L: LinkLayer> ResponseReader<L> {
    /// Create a reader with the default decoder settings
    pub fn new(link: L) -> Self {
        Self::with_settings(link, DecoderSettings::default())
    }

    pub fn with_settings(link: L, settings: DecoderSettings) -> Self {
        Self {
            link,
            decoder: AxdrDecoder::with_settings(settings),
        }
    }

    /// Connect the underlying link
    pub async fn open(&mut self) -> DlmsResult<()> {
        self.link.connect().await
    }

    /// Disconnect the underlying link
    pub async fn close(&mut self) -> DlmsResult<()> {
        self.link.disconnect().await
    }

    /// Send an encoded request and decode the value read back
    pub async fn get(&mut self, request: &[u8]) -> DlmsResult<ValueNode> {
        log::debug!("Sending {} byte request", request.len());
        self.link.send(request).await?;
        let response = self.link.read().await?;
        log::debug!("Received {} byte response", response.len());

        self.decoder.decode(&response).inspect_err(|e| {
            log::error!("Failed to decode response {:02X?}: {}", response.as_ref(), e);
        })
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn decoder(&self) -> &AxdrDecoder {
        &self.decoder
    }

    /// Give back the link
    pub fn into_inner(self) -> L {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use dlms_core::{DataType, DlmsError};
    use dlms_transport::MockLinkLayer;

    fn link_returning(response: &'static [u8]) -> MockLinkLayer {
        let mut link = MockLinkLayer::new();
        link.expect_send().times(1).returning(|_| Ok(()));
        link.expect_read()
            .times(1)
            .returning(move || Ok(Bytes::from_static(response)));
        link
    }

    #[tokio::test]
    async fn test_get_decodes_response() {
        let mut link = link_returning(&[0x02, 0x02, 0x0F, 0x05, 0x12, 0x03, 0xE8]);
        link.expect_connect().times(1).returning(|| Ok(()));
        link.expect_disconnect().times(1).returning(|| Ok(()));

        let mut reader = ResponseReader::new(link);
        reader.open().await.unwrap();
        let node = reader.get(&[0xC0, 0x01, 0x81]).await.unwrap();
        reader.close().await.unwrap();

        assert_eq!(node.data_type(), DataType::Structure);
        assert_eq!(node.children()[0].value(), "5");
        assert_eq!(node.children()[1].value(), "1000");
    }

    #[tokio::test]
    async fn test_get_reports_decode_error() {
        let link = link_returning(&[0xFE, 0x00]);
        let mut reader = ResponseReader::new(link);
        assert!(matches!(
            reader.get(&[0xC0]).await,
            Err(DlmsError::UnknownTag(0xFE))
        ));
    }

    #[tokio::test]
    async fn test_get_uses_reader_settings() {
        let link = link_returning(&[0x01, 0x02, 0x11, 0x01]);
        let mut reader = ResponseReader::with_settings(link, DecoderSettings::strict());
        assert!(reader.decoder().settings().strict);
        assert!(matches!(
            reader.get(&[0xC0]).await,
            Err(DlmsError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_get_propagates_link_error() {
        let mut link = MockLinkLayer::new();
        link.expect_send().returning(|_| Ok(()));
        link.expect_read().returning(|| Err(DlmsError::Timeout));
        let mut reader = ResponseReader::new(link);
        assert!(matches!(reader.get(&[0xC0]).await, Err(DlmsError::Timeout)));
    }
}
