//! # Object Collectives
//!
//! Collectives that move whole handle slices between ranks by way of an
//! [`ObjectSerializer`].

use bricks_core::BricksResult;
use bricks_registry::AbstractHandle;
use bricks_serializer::ObjectSerializer;
use tracing::debug;

use crate::communicator::Communicator;

/// Broadcast the root's handles to every rank.
///
/// The root encodes `handles`; every other rank decodes the received bytes
/// into its own `handles`, which must have the root's length.
pub async fn broadcast_objects<B, C, Z>(
    comm: &C,
    root: usize,
    serializer: &Z,
    handles: &mut [AbstractHandle<B>],
) -> BricksResult<()>
where
    B: ?Sized,
    C: Communicator + ?Sized,
    Z: ObjectSerializer<B> + ?Sized,
{
    let mut buffer = if comm.rank() == root {
        serializer.encode_to_vec(handles)?
    } else {
        Vec::new()
    };

    comm.broadcast(root, &mut buffer).await?;

    if comm.rank() != root {
        serializer.decode(&buffer, handles)?;
    }

    debug!(
        rank = comm.rank(),
        root,
        records = handles.len(),
        bytes = buffer.len(),
        "Objects broadcast"
    );
    Ok(())
}

/// Two communicators are congruent when they have the same size and rank.
pub fn comm_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Communicator + ?Sized,
    B: Communicator + ?Sized,
{
    a.size() == b.size() && a.rank() == b.rank()
}
