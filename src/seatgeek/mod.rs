//! # SeatGeek Integration Module
//!
//! Read-only client for the SeatGeek events API. One operation is exposed:
//! [`events::search_events`], which looks up concerts around a zipcode within
//! a local-time date window and classifies the outcome as found, empty, or
//! failed.
//!
//! Authentication is a client ID query parameter; no OAuth dance is involved
//! on this side of the pipeline.

pub mod events;
