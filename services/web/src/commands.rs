use crate::infra::{load_catalog, parse_relay_url};
use clap::{Args, ValueEnum};
use shiftcare::catalog::{ListingCard, ListingCatalog};
use shiftcare::config::AppConfig;
use shiftcare::error::AppError;
use shiftcare::signup::{HttpRelayClient, Role, SignupController, SignupForm};
use shiftcare::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    /// JSON listings file to print instead of the configured catalog
    #[arg(long)]
    pub(crate) listings: Option<PathBuf>,
    /// Emit the cards as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SignupArgs {
    /// Full name of the person signing up
    #[arg(long)]
    pub(crate) name: String,
    /// Contact e-mail address
    #[arg(long)]
    pub(crate) email: String,
    /// Which side of the marketplace the sign-up is for
    #[arg(long, value_enum)]
    pub(crate) role: RoleArg,
    /// Relay endpoint overriding SIGNUP_RELAY_URL
    #[arg(long, value_parser = parse_relay_url)]
    pub(crate) relay_url: Option<Url>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RoleArg {
    Professional,
    Clinic,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Professional => Role::Professional,
            RoleArg::Clinic => Role::Clinic,
        }
    }
}

pub(crate) fn run_listings(args: ListingsArgs) -> Result<(), AppError> {
    let ListingsArgs { listings, json } = args;

    let path = match listings {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.listings_path,
    };
    let catalog = load_catalog(path.as_deref())?;

    if json {
        match serde_json::to_string_pretty(&catalog.cards()) {
            Ok(body) => println!("{}", body),
            Err(err) => println!("Listing payload unavailable: {}", err),
        }
        return Ok(());
    }

    render_listings(&catalog);
    Ok(())
}

pub(crate) async fn run_signup(args: SignupArgs) -> Result<(), AppError> {
    let SignupArgs {
        name,
        email,
        role,
        relay_url,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let relay = HttpRelayClient::new(relay_url.unwrap_or(config.relay.endpoint));
    println!("Relaying sign-up to {}", relay.endpoint());

    let controller = SignupController::new(Arc::new(relay));
    let mut form = SignupForm::new(name, email, role.into());
    let phase = controller.submit(&mut form).await?;

    println!("Sign-up {}", phase.label());
    if let Some(message) = phase.status_message() {
        println!("  {}", message);
    }

    Ok(())
}

fn render_listings(catalog: &ListingCatalog) {
    if catalog.is_empty() {
        println!("Open shifts: none");
        return;
    }

    println!("Open shifts ({})", catalog.len());
    for card in catalog.cards() {
        render_card(&card);
    }
}

fn render_card(card: &ListingCard) {
    println!("\n[{}] {} - {}", card.id, card.title, card.clinic_name);
    println!("  Specialty: {}", card.specialty);
    println!("  When: {} | {}", card.dates, card.time);
    println!("  Location: {}", card.location);
    println!("  Rate: {}", card.rate);
    println!("  {}", card.description);
    println!("  {} -> {}", card.button_label, card.href);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_argument_maps_onto_domain_role() {
        assert_eq!(Role::from(RoleArg::Professional), Role::Professional);
        assert_eq!(Role::from(RoleArg::Clinic), Role::Clinic);
    }

    #[test]
    fn listings_from_missing_file_fail() {
        let args = ListingsArgs {
            listings: Some(PathBuf::from("/nonexistent/listings.json")),
            json: false,
        };
        let err = run_listings(args).expect_err("missing file");
        assert!(matches!(err, AppError::Catalog(_)));
    }
}
