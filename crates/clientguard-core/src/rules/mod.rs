pub mod date;
pub mod email;
pub mod generic;
pub mod schema;

pub use date::DateFormatCheck;
pub use email::EmailSyntaxCheck;
pub use generic::UnicityCheck;
pub use schema::RequiredColumnsCheck;

pub const ID_COLUMN: &str = "id";
pub const NAME_COLUMN: &str = "nome";
pub const EMAIL_COLUMN: &str = "email";
pub const BIRTH_DATE_COLUMN: &str = "data_nascimento";

/// Columns every customer file must carry, in reporting order
pub const REQUIRED_COLUMNS: [&str; 4] = [ID_COLUMN, NAME_COLUMN, EMAIL_COLUMN, BIRTH_DATE_COLUMN];
