//! Transit trip planner server.
//!
//! Plans a rider's trip across a fixed public-transit network: given an
//! origin stop, a destination stop, a day of week and a ready time, it
//! produces candidate itineraries of ride and walk legs, using one of
//! three swappable strategies (time-dependent shortest path, direct
//! single line, walking fallback).

pub mod cache;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod storage;
pub mod web;
