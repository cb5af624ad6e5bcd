// src/cli/account.rs — login / register / logout / status commands

use crate::api::ApiGateway;
use crate::auth::session::{SessionController, SessionState};
use crate::infra::errors::ChemvizError;
use crate::infra::paths;

fn password_or_prompt(password: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(inquire::Password::new(prompt)
            .without_confirmation()
            .prompt()?),
    }
}

pub async fn run_login(
    gateway: &dyn ApiGateway,
    session: &mut SessionController,
    username: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = password_or_prompt(password, "Password:")?;

    match gateway.authenticate(username, &password).await {
        Ok(_) => {
            session.on_authenticated();
            println!("Login successful!");
            Ok(())
        }
        Err(ChemvizError::Auth { .. }) => {
            anyhow::bail!("Invalid username or password")
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn run_register(
    gateway: &dyn ApiGateway,
    username: &str,
    email: &str,
    password: Option<String>,
) -> anyhow::Result<()> {
    let password = password_or_prompt(password, "Choose a password:")?;

    match gateway.register(username, email, &password).await {
        Ok(user) => {
            println!(
                "Registration successful! Please login as '{}'.",
                user.username
            );
            Ok(())
        }
        Err(ChemvizError::Validation { message }) => anyhow::bail!("{message}"),
        Err(err) => Err(err.into()),
    }
}

pub fn run_logout(session: &mut SessionController) -> anyhow::Result<()> {
    session.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn run_status(session: &SessionController) -> anyhow::Result<()> {
    let state = match session.state() {
        SessionState::Checking => "checking",
        SessionState::Authenticated => "authenticated",
        SessionState::Unauthenticated => "unauthenticated",
    };
    println!("session:    {state}");
    println!("config dir: {}", paths::config_dir().display());
    Ok(())
}
