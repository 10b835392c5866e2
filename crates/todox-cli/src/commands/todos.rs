//! Todo subcommands
//!
//! Usage: todox add <LIST> <NAME> | check|uncheck|remove <LIST> <TODO>

use clap::Args;
use todox_core::{ListId, Session, TodoId};
use todox_core_types::RequestContext;
use todox_engine::commands::{todo_create, todo_delete, todo_set_status};
use todox_engine::Backend;

use super::CmdResult;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// List id
    pub list: ListId,
    /// Todo text
    pub name: String,
}

#[derive(Debug, Args)]
pub struct TodoArgs {
    /// List id
    pub list: ListId,
    /// Todo id within the list
    pub todo: TodoId,
}

pub fn add(backend: &Backend, session: &mut Session, args: AddArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        todo_create(store, ctx, args.list, &args.name)
    })?;
    Ok(())
}

pub fn set_status(
    backend: &Backend,
    session: &mut Session,
    args: TodoArgs,
    completed: bool,
) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        todo_set_status(store, ctx, args.list, args.todo, completed)
    })?;
    Ok(())
}

pub fn remove(backend: &Backend, session: &mut Session, args: TodoArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        todo_delete(store, ctx, args.list, args.todo)
    })?;
    Ok(())
}
