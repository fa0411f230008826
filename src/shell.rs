//! Interactive text menu over a [`Ledger`]

use crate::{
    client::Client,
    errors::LedgerErr,
    ledger::Ledger,
    transaction::Transaction,
};
use rust_decimal::Decimal;
use std::{fmt::Display, str::FromStr};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

const MENU: &str = "
[1]\tDeposit
[2]\tWithdraw
[3]\tStatement
[4]\tNew client
[5]\tNew account
[6]\tList accounts
[q]\tQuit
=> ";

/// Menu loop reading answers from `R` and writing prompts and results to `W`
pub struct Shell<'l, R, W> {
    ledger: &'l mut Ledger,
    input: Lines<R>,
    output: W,
}

impl<'l, R, W> Shell<'l, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create shell operating on `ledger`
    pub fn new(ledger: &'l mut Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input: input.lines(),
            output,
        }
    }

    /// Run until `q` is selected or input ends
    pub async fn run(mut self) -> io::Result<()> {
        while let Some(option) = self.prompt(MENU).await? {
            match option.as_str() {
                "1" => self.transact(Transaction::Deposit).await?,
                "2" => self.transact(Transaction::Withdrawal).await?,
                "3" => self.statement().await?,
                "4" => self.create_client().await?,
                "5" => self.open_account().await?,
                "6" => self.list_accounts().await?,
                "q" => break,
                _ => self.say("\n@@@ Invalid option, please select again. @@@").await?,
            }
        }
        self.output.flush().await
    }

    async fn transact(&mut self, transaction: fn(Decimal) -> Transaction) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ").await? else {
            return Ok(());
        };
        if self.ledger.find_client(&tax_id).is_none() {
            return self.say("\n@@@ Client not found! @@@").await;
        }

        let Some(raw_amount) = self.prompt("Amount: ").await? else {
            return Ok(());
        };
        let Ok(amount) = Decimal::from_str(&raw_amount) else {
            return self.say("\n@@@ Invalid input, enter a number. @@@").await;
        };

        match self.ledger.transact(&tax_id, transaction(amount)) {
            Ok(receipt) => self.say(format!("\n=== {receipt} ===")).await,
            Err(e) => self.fail(e).await,
        }
    }

    async fn statement(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ").await? else {
            return Ok(());
        };
        match self.ledger.statement(&tax_id) {
            Ok(statement) => {
                let text = format!("\n{statement}\n===========================================");
                self.say(text).await
            }
            Err(e) => self.fail(e).await,
        }
    }

    async fn create_client(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Tax id (numbers only): ").await? else {
            return Ok(());
        };
        if self.ledger.find_client(&tax_id).is_some() {
            return self.fail(LedgerErr::DuplicateTaxId(tax_id)).await;
        }
        let Some(name) = self.prompt("Full name: ").await? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ").await? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address: ").await? else {
            return Ok(());
        };

        let created = self
            .ledger
            .create_client(Client::new(name, birth_date, tax_id, address))
            .map(|_| ());
        match created {
            Ok(()) => self.say("\n=== Client created successfully! ===").await,
            Err(e) => self.fail(e).await,
        }
    }

    async fn open_account(&mut self) -> io::Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ").await? else {
            return Ok(());
        };
        match self.ledger.open_account(&tax_id) {
            Ok(number) => {
                self.say(format!("\n=== Account {number} created successfully! ==="))
                    .await
            }
            Err(e) => self.fail(e).await,
        }
    }

    async fn list_accounts(&mut self) -> io::Result<()> {
        let accounts = self.ledger.accounts();
        if accounts.is_empty() {
            return self.say("\nNo accounts opened yet.").await;
        }
        for account in accounts {
            self.say("=".repeat(100)).await?;
            self.say(account).await?;
        }
        Ok(())
    }

    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        let line = self.input.next_line().await?;
        Ok(line.map(|l| l.trim().to_owned()))
    }

    async fn say(&mut self, text: impl Display) -> io::Result<()> {
        let text = format!("{text}\n");
        self.output.write_all(text.as_bytes()).await
    }

    async fn fail(&mut self, e: LedgerErr) -> io::Result<()> {
        let text = match e {
            LedgerErr::AccountNotFound(_) => "Client has no account.".to_owned(),
            e => e.to_string(),
        };
        self.say(format!("\n@@@ {text} @@@")).await
    }
}
