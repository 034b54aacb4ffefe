use crate::server::{
    error::AppError, model::status::AcceptanceStatus, service::history::HistoryService,
};
use test_utils::{builder::TestBuilder, factory};

mod competition;
