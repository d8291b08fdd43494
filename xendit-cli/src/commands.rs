//! Subcommands, one per disbursement API call.

use clap::Subcommand;
use rust_decimal::Decimal;
use xendit_sdk::{ClientError, CreateDisbursement, DisbursementClient, RequestHeaders};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a disbursement
    Create {
        #[arg(long)]
        external_id: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        account_holder_name: String,
        #[arg(long)]
        account_number: String,
        #[arg(long)]
        description: String,
        /// Notify these addresses when the disbursement completes
        #[arg(long, value_delimiter = ',')]
        email_to: Vec<String>,
    },
    /// Show the most recent disbursement with an external id
    Find {
        #[arg(long)]
        external_id: String,
    },
    /// List every disbursement with an external id
    Where {
        #[arg(long)]
        external_id: String,
    },
    /// Show a disbursement by its id
    Get {
        #[arg(long)]
        id: String,
    },
    /// List the banks this account can disburse to
    Banks,
}

impl Command {
    /// Run the command and return the JSON to print.
    pub async fn run(
        self,
        client: &DisbursementClient,
        headers: &RequestHeaders,
    ) -> Result<serde_json::Value, ClientError> {
        match self {
            Command::Create {
                external_id,
                amount,
                bank_code,
                account_holder_name,
                account_number,
                description,
                email_to,
            } => {
                let mut params = CreateDisbursement::new(
                    external_id,
                    amount,
                    bank_code,
                    account_holder_name,
                    account_number,
                    description,
                );
                if !email_to.is_empty() {
                    params = params.with_email_to(email_to);
                }
                let disbursement = client.create(&params, headers).await?;
                tracing::info!(
                    id = disbursement.id(),
                    status = %disbursement.status(),
                    "disbursement created"
                );
                Ok(disbursement.into_payload())
            }
            Command::Find { external_id } => Ok(client
                .find_by_external_id(&external_id, headers)
                .await?
                .into_payload()),
            Command::Where { external_id } => {
                let disbursements = client.where_by_external_id(&external_id, headers).await?;
                Ok(serde_json::Value::Array(
                    disbursements
                        .into_iter()
                        .map(|d| d.into_payload())
                        .collect(),
                ))
            }
            Command::Get { id } => Ok(client.find_by_id(&id, headers).await?.into_payload()),
            Command::Banks => Ok(serde_json::to_value(client.available_banks().await?)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_create() {
        let cli = TestCli::try_parse_from([
            "xendit",
            "create",
            "--external-id",
            "ext-1",
            "--amount",
            "15000",
            "--bank-code",
            "BCA",
            "--account-holder-name",
            "Bob Jones",
            "--account-number",
            "1111111111",
            "--description",
            "Payment",
            "--email-to",
            "a@example.com,b@example.com",
        ])
        .unwrap();

        match cli.command {
            Command::Create {
                amount, email_to, ..
            } => {
                assert_eq!(amount, Decimal::from(15_000));
                assert_eq!(email_to, ["a@example.com", "b@example.com"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_where() {
        let cli = TestCli::try_parse_from(["xendit", "where", "--external-id", "ext-1"]).unwrap();
        assert!(matches!(cli.command, Command::Where { external_id } if external_id == "ext-1"));
    }

    #[test]
    fn test_create_requires_amount() {
        let result = TestCli::try_parse_from([
            "xendit",
            "create",
            "--external-id",
            "ext-1",
            "--bank-code",
            "BCA",
            "--account-holder-name",
            "Bob Jones",
            "--account-number",
            "1111111111",
            "--description",
            "Payment",
        ]);
        assert!(result.is_err());
    }
}
