// src/config.rs
use crate::api::PaginationRequest;
use crate::constants::{
    ACCESS_TOKEN_ENV_VAR, BASE_URL_ENV_VAR, SMARTSHEET_MAX_PAGE_SIZE, SMARTSHEET_PROD_URL,
};
use crate::error::AppError;
use crate::types::{AccessToken, BaseUrl, ValidationError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Smartsheet access token (defaults to $SMARTSHEET_ACCESS_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL (defaults to $SMARTSHEET_BASE_URL, then production)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Walk listings page by page with this size instead of asking for everything at once
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Log request and response bodies
    #[arg(long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Pretty-print traced bodies
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Find home folders by name
    FindFolder {
        name: String,
        /// List every match instead of the first one
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Find a workspace by name
    FindWorkspace { name: String },
    /// Find sheets by name
    FindSheet { name: String },
    /// Print a sheet summary
    ShowSheet {
        sheet_id: String,
        /// Include the column list
        #[arg(long, default_value_t = false)]
        columns: bool,
        /// Include every row's cell values
        #[arg(long, default_value_t = false)]
        rows: bool,
    },
    /// List a sheet's attachments keyed by name
    Attachments { sheet_id: String },
    /// Download every attachment of a sheet into a directory
    Download { sheet_id: String, dir: PathBuf },
}

/// Resolved client configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub access_token: AccessToken,
    pub base_url: BaseUrl,
    /// `None` asks the server for every item in one page.
    pub page_size: Option<u32>,
    pub trace: bool,
    pub trace_pretty: bool,
}

impl ClientConfig {
    /// Production configuration for the given token.
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            base_url: Self::production_url(),
            page_size: None,
            trace: false,
            trace_pretty: false,
        }
    }

    pub fn with_base_url(self, base_url: BaseUrl) -> Self {
        Self { base_url, ..self }
    }

    pub fn with_page_size(self, page_size: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            page_size: Some(validate_page_size(page_size)?),
            ..self
        })
    }

    /// Logs request/response bodies, optionally pretty-printed.
    pub fn with_trace(self, pretty: bool) -> Self {
        Self {
            trace: true,
            trace_pretty: pretty,
            ..self
        }
    }

    /// Resolves a complete configuration from CLI input and the process environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with_env(cli, |name| std::env::var(name).ok())
    }

    /// Resolves a configuration with an injectable environment lookup.
    ///
    /// Blank CLI values fall through to the environment, blank environment
    /// values fall through to the defaults.
    pub fn resolve_with_env<F>(cli: &CommandLineInput, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = non_blank(cli.token.clone())
            .or_else(|| non_blank(env(ACCESS_TOKEN_ENV_VAR)))
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "no access token given and {} is not set",
                    ACCESS_TOKEN_ENV_VAR
                ))
            })?;

        let base_url = match non_blank(cli.base_url.clone()).or_else(|| non_blank(env(BASE_URL_ENV_VAR))) {
            Some(url) => BaseUrl::parse(&url)?,
            None => Self::production_url(),
        };

        let page_size = cli.page_size.map(validate_page_size).transpose()?;

        Ok(ClientConfig {
            access_token: AccessToken::new(token)?,
            base_url,
            page_size,
            trace: cli.trace,
            trace_pretty: cli.pretty,
        })
    }

    /// How listings are walked under this configuration.
    pub fn pagination(&self) -> PaginationRequest {
        match self.page_size {
            Some(size) => PaginationRequest::paged(size),
            None => PaginationRequest::all_pages(),
        }
    }

    fn production_url() -> BaseUrl {
        BaseUrl::parse(SMARTSHEET_PROD_URL).expect("production URL constant is valid")
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn validate_page_size(page_size: u32) -> Result<u32, ValidationError> {
    if page_size == 0 || page_size > SMARTSHEET_MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfBounds {
            value: page_size,
            min: 1,
            max: SMARTSHEET_MAX_PAGE_SIZE,
        });
    }
    Ok(page_size)
}
