//! Command-line surface
//!
//! Settings come from flags, `TABLEBOOK_*` environment variables or a
//! `.env` file; anything unset keeps the `Config` default.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablebook_core::Config;

use crate::commands::{self, CommandResult};
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "tablebook")]
#[command(author, version, about = "Restaurant table booking", long_about = None)]
pub struct Cli {
    /// Directory holding the cookie jar.
    #[arg(long, env = "TABLEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Booking backend base URL.
    #[arg(long, env = "TABLEBOOK_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// OAuth client id for the identity provider.
    #[arg(long, env = "TABLEBOOK_GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,

    /// OAuth redirect URI.
    #[arg(long, env = "TABLEBOOK_REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    /// Public origin of this frontend.
    #[arg(long, env = "TABLEBOOK_FRONTEND_URL")]
    pub frontend_url: Option<String>,

    /// Restaurant shown by the booking widget.
    #[arg(long, env = "TABLEBOOK_RESTAURANT_ID")]
    pub restaurant_id: Option<String>,

    /// Backend request timeout in seconds.
    #[arg(long, env = "TABLEBOOK_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = match &self.data_dir {
            Some(dir) => Config::new(dir.clone()),
            None => Config::default(),
        };

        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(client_id) = &self.google_client_id {
            config.google_client_id = client_id.clone();
        }
        if let Some(uri) = &self.redirect_uri {
            config.redirect_uri = uri.clone();
        }
        if let Some(url) = &self.frontend_url {
            config.frontend_url = url.clone();
        }
        if let Some(id) = &self.restaurant_id {
            config.restaurant_id = id.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }

        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the identity provider sign-in URL.
    SignInUrl,
    /// Finish sign-in from the provider's redirect URL.
    Callback {
        /// Full redirect URL carrying `user` or `error`.
        url: String,
    },
    /// Show whether someone is signed in.
    Whoami,
    /// Show the dashboard greeting for the signed-in user.
    Dashboard,
    /// Sign out and drop the session cookie.
    Logout,
    /// List restaurants for the homepage.
    Restaurants,
    /// List the configured restaurant's tables.
    Tables,
    /// Click a table card with the given time.
    Book {
        /// Table id.
        #[arg(long)]
        table: String,
        /// Booking time, e.g. 19:30.
        #[arg(long, default_value = "")]
        time: String,
    },
    /// Print the shareable link for a table.
    Link {
        /// Table id.
        #[arg(long)]
        table: String,
    },
}

pub async fn dispatch(state: &AppState, command: Commands) -> CommandResult<serde_json::Value> {
    match command {
        Commands::SignInUrl => commands::auth::sign_in_url(state).into_json(),
        Commands::Callback { url } => commands::auth::complete_sign_in(state, url).into_json(),
        Commands::Whoami => commands::auth::get_auth_state(state).into_json(),
        Commands::Dashboard => commands::auth::get_dashboard(state).into_json(),
        Commands::Logout => commands::auth::logout(state).into_json(),
        Commands::Restaurants => commands::home::list_restaurants(state).await.into_json(),
        Commands::Tables => commands::tables::load_tables(state).await.into_json(),
        Commands::Book { table, time } => commands::tables::book_table(state, table, time)
            .await
            .into_json(),
        Commands::Link { table } => commands::home::table_link(state, table).into_json(),
    }
}
