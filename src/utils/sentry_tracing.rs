use sentry::{
    Transaction,
    TransactionContext
};

/// Opens a Sentry transaction, but only while trace logging is on.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

pub fn finish_trace_transaction(transaction: Option<Transaction>, success: bool) {
    if let Some(txn) = transaction {
        txn.set_status(if success { sentry::protocol::SpanStatus::Ok } else { sentry::protocol::SpanStatus::UnknownError });
        txn.finish();
    }
}
