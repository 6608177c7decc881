//! Organization CLI commands

use clap::Subcommand;

use crate::display::format_org_list;
use crate::error::{SpendwellError, SpendwellResult};
use crate::services::OrganizationService;

use super::AppContext;

/// Organization subcommands
#[derive(Subcommand)]
pub enum OrgCommands {
    /// List organizations you belong to
    List,

    /// Create a new organization (you become its owner)
    Create {
        /// Organization name
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Switch the active organization
    Switch {
        /// Organization name or ID
        org: String,
    },
}

/// Handle an organization command
pub fn handle_org_command(ctx: &mut AppContext, cmd: OrgCommands) -> SpendwellResult<()> {
    let session = ctx.session.as_mut().ok_or(SpendwellError::NotSignedIn)?;

    match cmd {
        OrgCommands::List => {
            let active = session.active_org;
            let service = OrganizationService::new(&ctx.client, session, &ctx.audit);
            let orgs = service.list()?;
            print!("{}", format_org_list(&orgs, active));
        }

        OrgCommands::Create { name, description } => {
            let passphrase = rpassword::prompt_password("Passphrase: ")
                .map_err(|e| SpendwellError::Io(format!("Failed to read passphrase: {}", e)))?;
            let confirm = rpassword::prompt_password("Confirm passphrase: ")
                .map_err(|e| SpendwellError::Io(format!("Failed to read passphrase: {}", e)))?;

            if passphrase != confirm {
                return Err(SpendwellError::Validation(
                    "Passphrases do not match".into(),
                ));
            }

            let mut service = OrganizationService::new(&ctx.client, session, &ctx.audit);
            let org = service.create(&name, description.as_deref(), &passphrase)?;

            ctx.session_store
                .save(ctx.session.as_ref().expect("session present"))?;

            println!("Organization created: {}", org.name);
            println!("ID: {}", org.id.as_uuid());
            println!("Your role: {}", org.role);
        }

        OrgCommands::Switch { org } => {
            let mut service = OrganizationService::new(&ctx.client, session, &ctx.audit);

            let found = service
                .find(&org)?
                .ok_or_else(|| SpendwellError::organization_not_found(org.as_str()))?;
            let switched = service.switch(found.id)?;

            ctx.session_store
                .save(ctx.session.as_ref().expect("session present"))?;

            println!("Active organization: {}", switched.name);
        }
    }

    Ok(())
}
