//! Bearer capabilities: uniform access to a payload and its metadata.
//!
//! Generic signing and verification code is written once against these
//! traits, so it never needs to know the concrete response or envelope
//! type carrying the data.

use bytes::Bytes;

use crate::metadata::ExchangeMetadata;

/// A carrier of one data payload and its exchange metadata.
pub trait DigitalSignatureBearer {
    /// The payload bytes, when present.
    fn payload(&self) -> Option<&Bytes>;

    /// Replace the payload bytes.
    fn set_payload(&mut self, data: Bytes);

    /// The metadata describing the payload, when present.
    fn exchange_metadata(&self) -> Option<&ExchangeMetadata>;

    /// Mutable access to the metadata, when present. Signing code stores
    /// the payload signature through this.
    fn exchange_metadata_mut(&mut self) -> Option<&mut ExchangeMetadata>;

    /// Replace the metadata.
    fn set_exchange_metadata(&mut self, metadata: ExchangeMetadata);
}

/// A carrier of a homogeneous list of bearers, as used by paginated
/// responses holding many signed data items.
///
/// Setting the collection replaces the entire backing sequence; there are
/// no partial or merge semantics.
pub trait DigitalSignatureCollectionBearer {
    /// The concrete bearer the collection holds.
    type Item: DigitalSignatureBearer;

    /// The carried bearers, in response order.
    fn items(&self) -> &[Self::Item];

    /// Replace the entire backing sequence.
    fn set_items(&mut self, items: Vec<Self::Item>);
}
