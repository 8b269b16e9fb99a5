//! Derive macro.
//!
//! **Note:** The macro itself is not contained in this module; it is at the top level of the
//! crate. This module is used to document it.
//!
//! `#[derive(Codec)]` implements [`Codec`](crate::Codec) for a struct whose fields all implement
//! `Codec`. The fields are stored back to back, in the order they are declared, with no padding,
//! so `Bytes` is a `[u8; N]` where `N` is the sum of the field sizes. Named, tuple and unit
//! structs are supported; enums, unions and generic structs are not.
//!
//! # Attributes
//!
//! Attributes are written as `#[wordio(...)]` and are all optional.
//!
//! ## Container Attributes
//!
//! - **`crate_path`** - Specify a custom path to the `wordio` crate. If you use the `wordio`
//! crate under a different name, this must be set to that path for the `derive` to successfully
//! compile.
//!
//! - **`endian`** - Either `"big"` or `"little"`. Every field uses this byte order, whatever order
//! is passed to `load` or `store`. Useful for formats that are defined in a single byte order:
//!
//! ```
//! use wordio::Codec;
//! use wordio::ctx::Endian;
//!
//! #[derive(Codec)]
//! #[wordio(endian = "little")]
//! struct Block([u8; 4], u32);
//!
//! let block = Block(*b"blk0", 1);
//! assert_eq!(block.to_bytes(Endian::Big), *b"blk0\x01\x00\x00\x00");
//! ```
//!
//! ## Field Attributes
//!
//! - **`endian`** - Either `"big"` or `"little"`. This field uses the given byte order, overriding
//! both the container attribute and the order passed in:
//!
//! ```
//! use wordio::Codec;
//! use wordio::ctx::Endian;
//!
//! #[derive(Codec)]
//! struct Mixed {
//!     a: u32,
//!     #[wordio(endian = "big")]
//!     b: u32,
//! }
//!
//! let mixed = Mixed { a: 1, b: 1 };
//! assert_eq!(mixed.to_bytes(Endian::Little), [1, 0, 0, 0, 0, 0, 0, 1]);
//! ```
//!
//! Derived types can themselves be fields of other derived types.
//!
//! # Errors
//!
//! Shapes that have no fixed layout are rejected at compile time. Generic structs:
//!
//! ```compile_fail
//! use wordio::Codec;
//!
//! #[derive(Codec)]
//! struct Generic<T>(T);
//! ```
//!
//! Enums:
//!
//! ```compile_fail
//! use wordio::Codec;
//!
//! #[derive(Codec)]
//! enum Choice {
//!     A,
//! }
//! ```
//!
//! Byte orders other than `"big"` and `"little"`:
//!
//! ```compile_fail
//! use wordio::Codec;
//!
//! #[derive(Codec)]
//! struct Middle {
//!     #[wordio(endian = "middle")]
//!     word: u32,
//! }
//! ```
