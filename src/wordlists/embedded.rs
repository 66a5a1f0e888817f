//! Embedded word data
//!
//! Category records compiled into the binary at build time.

// Include generated records from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
