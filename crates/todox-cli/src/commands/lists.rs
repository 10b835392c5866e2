//! List subcommands
//!
//! Usage: todox lists | show <LIST> | new-list <NAME> | rename <LIST> <NAME>
//!        | delete-list <LIST> | complete-all <LIST>

use clap::Args;
use todox_core::{ListId, Message, Session};
use todox_core_types::RequestContext;
use todox_engine::commands::{
    list_create, list_delete, list_rename, list_show, lists_index, todos_complete_all,
};
use todox_engine::Backend;

use super::{render_summary, render_todo, CmdResult};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List id
    pub list: ListId,
}

#[derive(Debug, Args)]
pub struct NewListArgs {
    /// Name of the new list
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// List id
    pub list: ListId,
    /// New name
    pub name: String,
}

pub fn index(backend: &Backend, session: &mut Session) -> CmdResult {
    let ctx = RequestContext::new();
    let lists = backend.with_store(session, |store| lists_index(store, &ctx))?;
    if lists.is_empty() {
        println!("No lists yet.");
    }
    for list in &lists {
        println!("{}", render_summary(list));
    }
    Ok(())
}

pub fn show(backend: &Backend, session: &mut Session, args: ListArgs) -> CmdResult {
    let ctx = RequestContext::new();
    match backend.with_store(session, |store| list_show(store, &ctx, args.list))? {
        Some((list, todos)) => {
            println!("{}", render_summary(&list));
            for todo in &todos {
                println!("{}", render_todo(todo));
            }
        }
        None => session.set_flash(Message::ListNotFound),
    }
    Ok(())
}

pub fn create(backend: &Backend, session: &mut Session, args: NewListArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        list_create(store, ctx, &args.name)
    })?;
    Ok(())
}

pub fn rename(backend: &Backend, session: &mut Session, args: RenameArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        list_rename(store, ctx, args.list, &args.name)
    })?;
    Ok(())
}

pub fn delete(backend: &Backend, session: &mut Session, args: ListArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        list_delete(store, ctx, args.list)
    })?;
    Ok(())
}

pub fn complete_all(backend: &Backend, session: &mut Session, args: ListArgs) -> CmdResult {
    backend.dispatch(session, &RequestContext::new(), |store, ctx| {
        todos_complete_all(store, ctx, args.list)
    })?;
    Ok(())
}
