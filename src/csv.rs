//! csv replay input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use futures::StreamExt;
use rust_decimal::Decimal;

use crate::{client::Client, errors::ReplayErr, ledger::Ledger, TaxId};
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::{Receiver, Sender},
};
use tokio_stream::wrappers::ReceiverStream;

// Allowed operation types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawOperationType {
    Client,
    Account,
    Deposit,
    Withdrawal,
}

/// Single csv row. `amount` is used by deposits and withdrawals, `name` by new clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawOperation {
    pub r#type: RawOperationType,
    pub tax_id: TaxId,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
}

impl RawOperation {
    /// Apply this row to `ledger`
    pub fn apply(self, ledger: &mut Ledger) -> Result<(), ReplayErr> {
        match self.r#type {
            RawOperationType::Client => {
                let name = self.name.ok_or(ReplayErr::MissingField("name"))?;
                ledger.create_client(Client::new(name, "", self.tax_id, ""))?;
            }
            RawOperationType::Account => {
                ledger.open_account(&self.tax_id)?;
            }
            RawOperationType::Deposit => {
                let amount = self.amount.ok_or(ReplayErr::MissingField("amount"))?;
                ledger.deposit(&self.tax_id, amount)?;
            }
            RawOperationType::Withdrawal => {
                let amount = self.amount.ok_or(ReplayErr::MissingField("amount"))?;
                ledger.withdraw(&self.tax_id, amount)?;
            }
        }
        Ok(())
    }
}

/// take a reader and continuously deserialize rows from it into `sender`
pub async fn deserialize_operations_from_csv_reader<R: AsyncRead + Unpin + Send>(
    input: R,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawOperation>();
    while let Some(record) = records.next().await {
        let record: RawOperation = record?;
        sender.send(record).await?;
    }

    Ok(())
}

/// Apply every received row in order. Rejected rows are logged and skipped, returns how many.
pub async fn replay(ledger: &mut Ledger, input: Receiver<RawOperation>) -> usize {
    let mut rows = ReceiverStream::new(input);
    let mut rejected = 0;

    while let Some(row) = rows.next().await {
        let description = format!("{:?} {}", row.r#type, row.tax_id);
        if let Err(e) = row.apply(ledger) {
            tracing::warn!(row = %description, "rejected: {e}");
            rejected += 1;
        }
    }
    rejected
}

/// save every account of `ledger` as csv into `wr`. Headers will be included automatically.
/// Terminator is `\r\n`.
pub async fn summarize_accounts(ledger: &Ledger, wr: impl AsyncWrite + Unpin) -> anyhow::Result<()> {
    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    for summary in ledger.accounts() {
        wr.serialize(summary).await?;
    }

    wr.flush().await?;
    Ok(())
}
