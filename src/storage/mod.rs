//! Backing storage primitives for the matrix-based graph representations.

pub(crate) mod dense;

pub(crate) use dense::DenseMatrix;
