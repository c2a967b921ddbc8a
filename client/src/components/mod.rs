//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard sections while reading/writing the shared
//! `DashboardState` signal handed down by the page.

pub mod account_card;
pub mod create_account_form;
pub mod money_form;
pub mod notice_banner;
pub mod transaction_table;
