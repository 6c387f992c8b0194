pub mod context;
pub mod line;
pub mod page;
pub mod party;
pub mod summary;

pub use context::{TaxContext, TaxRegime, TransactionKind};
pub use line::{ComputedLine, ItemKind, LineItem};
pub use page::{DocumentHeader, Page, PageSection, PartyBlock};
pub use party::{BankAccount, Company, Party, Transaction};
pub use summary::{HsnSummaryRow, TaxTotals};
