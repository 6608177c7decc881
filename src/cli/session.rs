//! Session CLI commands
//!
//! Sign-in, sign-out, and configuration display. Signing in establishes
//! the explicit session context everything else reads from.

use crate::audit::{AuditAction, AuditEntry};
use crate::error::{SpendwellError, SpendwellResult};
use crate::models::UserId;
use crate::session::SessionContext;

use super::AppContext;

/// Establish a session with a server-issued token
pub fn handle_login(ctx: &mut AppContext, token: String, user: String) -> SpendwellResult<()> {
    let user_id: UserId = user
        .parse()
        .map_err(|_| SpendwellError::Validation(format!("Invalid user id: {}", user)))?;

    let session = match ctx.session.take() {
        // Keep key-derivation parameters so wrapped org keys stay usable
        Some(mut existing) => {
            existing.renew(token, user_id);
            existing
        }
        None => SessionContext::sign_in(token, user_id),
    };

    ctx.session_store.save(&session)?;
    ctx.session = Some(session);

    ctx.audit.log(&AuditEntry::new(
        AuditAction::SignIn,
        Some(user_id.as_uuid().to_string()),
    ))?;

    println!("Signed in as {}", user_id);
    Ok(())
}

/// End the current session and discard its context
pub fn handle_logout(ctx: &mut AppContext) -> SpendwellResult<()> {
    if ctx.session.is_none() {
        println!("No active session.");
        return Ok(());
    }

    let user = ctx.session.as_ref().map(|s| s.user_id);
    ctx.session_store.clear()?;
    ctx.session = None;

    ctx.audit.log(&AuditEntry::new(
        AuditAction::SignOut,
        user.map(|u| u.as_uuid().to_string()),
    ))?;

    println!("Signed out.");
    Ok(())
}

/// Show current configuration and session status
pub fn handle_config(ctx: &AppContext) -> SpendwellResult<()> {
    println!("Spendwell Configuration");
    println!("=======================");
    println!("Config directory:   {}", ctx.paths.config_dir().display());
    println!(
        "Download directory: {}",
        ctx.settings.download_dir(&ctx.paths).display()
    );
    println!("Audit log:          {}", ctx.paths.audit_log().display());
    println!();
    println!("Server:  {}", ctx.settings.server_url);
    println!("Timeout: {}s", ctx.settings.timeout_secs);
    println!();

    match &ctx.session {
        Some(session) => {
            println!("Signed in as: {}", session.user_id);
            println!(
                "Session started: {}",
                session.signed_in_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            match session.active_org {
                Some(org) => println!("Active organization: {}", org),
                None => println!("Active organization: none"),
            }
        }
        None => {
            println!("Not signed in.");
            println!("Run 'spendwell login --token <TOKEN> --user <USER_ID>' to sign in.");
        }
    }

    Ok(())
}
