mod client;
mod error;
mod render;


use bank_types::{
    AccountType, Decimal, HistoryQuery, LoginRequest, RegisterRequest, SortDirection, TransactionRequest,
    TransferRequest,
};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::client::{BankClient, Reply};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "bank-cli", about = "Banking backend API CLI")]
struct Cli {
    #[arg(long, env = "BANK_API_URL", default_value = "http://localhost:8080/api")]
    base_url: String,

    #[arg(long, env = "BANK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print the raw JSON response body.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print a session token.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "BANK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "BANK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check a token; defaults to --token.
    Validate { token: Option<String> },
    Accounts(AccountsCommand),
    Balance {
        account_id: String,
    },
    Deposit(MoneyArgs),
    Withdraw(MoneyArgs),
    Transfer {
        from_account_id: String,
        to_account_id: String,
        #[arg(value_parser = parse_amount)]
        amount: Decimal,
        #[arg(long)]
        description: Option<String>,
    },
    History(HistoryArgs),
}

#[derive(Args, Debug)]
struct AccountsCommand {
    #[command(subcommand)]
    command: AccountsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AccountsSubcommand {
    List {
        #[arg(long)]
        user_id: String,
    },
    Show {
        account_id: String,
    },
    Create {
        #[arg(long)]
        user_id: String,
        #[arg(long = "type", default_value = "savings")]
        account_type: AccountType,
    },
}

#[derive(Args, Debug)]
struct MoneyArgs {
    account_id: String,
    #[arg(value_parser = parse_amount)]
    amount: Decimal,
    #[arg(long)]
    description: Option<String>,
}

impl MoneyArgs {
    fn into_request(self) -> TransactionRequest {
        TransactionRequest {
            account_id: self.account_id,
            amount: self.amount,
            description: self.description,
        }
    }
}

#[derive(Args, Debug)]
struct HistoryArgs {
    account_id: String,
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = 10)]
    size: u32,
    #[arg(long, default_value = "createdAt")]
    sort_by: String,
    #[arg(long, default_value = "desc")]
    direction: SortDirection,
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let amount: Decimal = raw.trim().parse().map_err(|e| format!("invalid amount `{raw}`: {e}"))?;
    if amount <= Decimal::ZERO {
        return Err("amount must be greater than zero".to_owned());
    }
    Ok(amount)
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = BankClient::new(&cli.base_url, cli.token.clone())?;
    tracing::debug!(base_url = %cli.base_url, "using backend");

    run(&client, cli.token.as_deref(), cli.json, cli.command).await
}

async fn run(client: &BankClient, token: Option<&str>, json: bool, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => {
            let reply = client.login(&LoginRequest { username, password }).await?;
            emit(json, &reply, render::auth)
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let request = RegisterRequest {
                username,
                email,
                password,
                roles: None,
            };
            let reply = client.register(&request).await?;
            emit(json, &reply, render::message)
        }
        Command::Validate { token: explicit } => {
            let token = explicit.as_deref().or(token).ok_or(CliError::MissingToken)?;
            let reply = client.validate(token).await?;
            emit(json, &reply, render::message)
        }
        Command::Accounts(accounts) => run_accounts(client, json, accounts).await,
        Command::Balance { account_id } => {
            let reply = client.balance(&account_id).await?;
            emit(json, &reply, |b| render::balance(&account_id, b.0))
        }
        Command::Deposit(args) => {
            let reply = client.deposit(&args.into_request()).await?;
            emit(json, &reply, render::transaction)
        }
        Command::Withdraw(args) => {
            let reply = client.withdraw(&args.into_request()).await?;
            emit(json, &reply, render::transaction)
        }
        Command::Transfer {
            from_account_id,
            to_account_id,
            amount,
            description,
        } => {
            let request = TransferRequest {
                from_account_id,
                to_account_id,
                amount,
                description,
            };
            let reply = client.transfer(&request).await?;
            emit(json, &reply, render::transaction)
        }
        Command::History(args) => {
            let query = HistoryQuery {
                page: args.page,
                size: args.size,
                sort_by: args.sort_by,
                direction: args.direction,
            };
            let reply = client.history(&args.account_id, &query).await?;
            emit(json, &reply, |page| render::history(&args.account_id, page))
        }
    }
}

async fn run_accounts(client: &BankClient, json: bool, accounts: AccountsCommand) -> Result<(), CliError> {
    match accounts.command {
        AccountsSubcommand::List { user_id } => {
            let reply = client.accounts_by_user(&user_id).await?;
            emit(json, &reply, |list| render::accounts(list))
        }
        AccountsSubcommand::Show { account_id } => {
            let reply = client.account(&account_id).await?;
            emit(json, &reply, render::account)
        }
        AccountsSubcommand::Create { user_id, account_type } => {
            let reply = client.create_account(&user_id, account_type).await?;
            tracing::info!(account_id = %reply.body.id, "account created");
            emit(json, &reply, render::account)
        }
    }
}

fn emit<T>(json: bool, reply: &Reply<T>, render: impl FnOnce(&T) -> String) -> Result<(), CliError> {
    if json {
        print_json(&reply.raw)
    } else {
        println!("{}", render(&reply.body));
        Ok(())
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
