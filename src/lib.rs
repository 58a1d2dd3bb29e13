//! Grid cell addressing for array-backed 2D structures.
//!
//! This crate provides [`Position`], an immutable (row, column) pair that
//! names one cell of an external grid: an image stored row by row in a flat
//! array, a union-find over pixels, a maze. A position carries no bounds and
//! no reference to any grid; it is a plain value with structural equality,
//! consistent hashing, and a row-major total order, so it works directly as
//! a `HashMap`, `HashSet`, or `BTreeMap` key.
//!
//! # Quick Start
//!
//! ```rust
//! use gridpos::Position;
//!
//! let a = Position::new(3, 5);
//! let b = Position::new(3, 5);
//! assert_eq!(a, b);
//! assert_ne!(a, Position::new(5, 3));
//!
//! // Negative values are accepted; bounds are the consuming grid's concern.
//! let off_grid = Position::new(-1, 2);
//! assert_eq!(off_grid.row(), -1);
//!
//! // Structural hashing makes Position a correct map key.
//! use std::collections::HashMap;
//! let mut weights: HashMap<Position, u32> = HashMap::new();
//! weights.insert(a, 7);
//! assert_eq!(weights[&b], 7);
//! ```
//!
//! # Validity
//!
//! Construction is total: any pair of `i64` values is a valid `Position`,
//! including negative ones. Whether the named cell exists in a particular
//! grid is a question only the consuming structure can answer, so bounds
//! checking deliberately lives there, not here.

mod pos;

pub use pos::Position;
