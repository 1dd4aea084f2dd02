//! Reception Desk
//!
//! Receptionist dashboard for a hospital front desk: ambulance requests,
//! today's appointments and bed availability, built on GPUI.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod views;
