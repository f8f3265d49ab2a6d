mod price_record;

pub use price_record::{PriceRecord, PriceRecordId};
