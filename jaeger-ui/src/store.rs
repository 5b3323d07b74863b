//! JaegerStoreActor - single writer for trace-search application state
//!
//! Actions never mutate state directly. They are sent to this actor's
//! mailbox and applied one at a time, in arrival order. Readers take cloned
//! snapshots.

use async_trait::async_trait;
use jaeger_types::{AppState, JaegerAction, Session};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};

use crate::jaeger::effects::Dispatch;
use crate::jaeger::state::apply_jaeger_action;

#[derive(Debug, Default)]
pub struct JaegerStoreActor;

pub struct JaegerStoreState {
    app: AppState,
    applied: u64,
}

#[derive(Debug)]
pub enum JaegerStoreMsg {
    /// Apply one trace-search action
    Dispatch(JaegerAction),
    /// Replace the authenticated session (None signs out)
    SetSession(Option<Session>),
    GetState {
        reply: RpcReplyPort<AppState>,
    },
    /// Number of actions applied so far
    GetAppliedCount {
        reply: RpcReplyPort<u64>,
    },
}

#[async_trait]
impl Actor for JaegerStoreActor {
    type Msg = JaegerStoreMsg;
    type State = JaegerStoreState;
    type Arguments = AppState;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        Ok(JaegerStoreState {
            app: args,
            applied: 0,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            JaegerStoreMsg::Dispatch(action) => {
                tracing::trace!(?action, "Applying action");
                apply_jaeger_action(&mut state.app.jaeger_state, action);
                state.applied += 1;
            }
            JaegerStoreMsg::SetSession(session) => {
                state.app.authentication.session = session;
            }
            JaegerStoreMsg::GetState { reply } => {
                let _ = reply.send(state.app.clone());
            }
            JaegerStoreMsg::GetAppliedCount { reply } => {
                let _ = reply.send(state.applied);
            }
        }
        Ok(())
    }
}

impl Dispatch for ActorRef<JaegerStoreMsg> {
    fn dispatch(&self, action: JaegerAction) {
        if let Err(e) = self.cast(JaegerStoreMsg::Dispatch(action)) {
            tracing::warn!(error = %e, "Store unavailable; action dropped");
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Snapshot of the current application state
pub async fn get_state(
    store: &ActorRef<JaegerStoreMsg>,
) -> Result<AppState, ractor::RactorErr<JaegerStoreMsg>> {
    ractor::call!(store, |reply| JaegerStoreMsg::GetState { reply })
}

pub async fn get_applied_count(
    store: &ActorRef<JaegerStoreMsg>,
) -> Result<u64, ractor::RactorErr<JaegerStoreMsg>> {
    ractor::call!(store, |reply| JaegerStoreMsg::GetAppliedCount { reply })
}

pub fn set_session(
    store: &ActorRef<JaegerStoreMsg>,
    session: Option<Session>,
) -> Result<(), ractor::RactorErr<JaegerStoreMsg>> {
    store
        .cast(JaegerStoreMsg::SetSession(session))
        .map_err(Into::into)
}
