//! Wire codec for ordered lists of group elements.
//!
//! The encoding is the protobuf wire format of
//!
//! ```text
//! message PointList {
//!     repeated bytes points = 1;
//! }
//! ```
//!
//! where each element carries the canonical encoding of a point. Decoders skip
//! fields they do not know, so the message can grow without breaking older
//! readers.

use super::error::CodecError;
use crate::backends::error::PointError;
use crate::traits::Group;
use crate::traits::Point;

use prost::Message;

#[derive(Clone, PartialEq, Message)]
struct PointList {
    #[prost(bytes = "vec", repeated, tag = "1")]
    points: Vec<Vec<u8>>,
}

pub fn encode_points<P: Point>(points: &[P]) -> Vec<u8> {
    PointList {
        points: points.iter().map(P::serialize).collect(),
    }
    .encode_to_vec()
}

/// Decodes a point list, calling `ctor` on the raw encoding of every element.
///
/// `ctor` decides the concrete element type, so a list written by one point
/// implementation can be read back into another one of the same group family.
pub fn decode_points<P, F>(bytes: &[u8], mut ctor: F) -> Result<Vec<P>, CodecError>
where
    F: FnMut(&[u8]) -> Result<P, PointError>,
{
    let list = PointList::decode(bytes).map_err(|err| {
        tracing::debug!(%err, "codec: malformed point list");
        CodecError::Decode(err)
    })?;

    list.points
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            ctor(raw.as_slice()).map_err(|source| {
                tracing::debug!(index, %source, "codec: invalid point");
                CodecError::Point { index, source }
            })
        })
        .collect()
}

/// [`decode_points`] with the group's own point type as element constructor.
pub fn decode_group_points<G: Group>(
    _group: &G,
    bytes: &[u8],
) -> Result<Vec<G::Point>, CodecError> {
    decode_points(bytes, G::Point::deserialize)
}
