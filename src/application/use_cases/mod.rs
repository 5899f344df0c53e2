/// Use cases module containing application business logic orchestration
mod component_session;

pub use component_session::{
    ComponentSessionController, FetchOutcome, FetchTicket, PendingFetch, SessionStatus,
};
