//! bdgeo-cli
//! =========
//!
//! Command-line interface for the `bdgeo-core` Bangladesh location directory.
//!
//! This crate primarily provides a binary (`bdgeo-cli`). The library target
//! only carries this overview so docs.rs renders a page.
//!
//! Basic usage:
//!
//! ```text
//! bdgeo-cli --help
//! bdgeo-cli stats
//! bdgeo-cli children dis-dhaka --kind area
//! bdgeo-cli path area-tongi --bn
//! bdgeo-cli search ঢাকা --json
//! ```
//!
//! For programmatic access use the [`bdgeo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
