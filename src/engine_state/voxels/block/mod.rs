//! # Block Module
//!
//! This module provides the block-related building blocks of the voxel engine:
//! the block type registry and the six block faces.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;
