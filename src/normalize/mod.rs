//! Field normalizers
//!
//! Each submodule turns one raw cell of the registration export into the
//! value stored in the `visitors` table. None of them fail: text that cannot
//! be interpreted comes back as `None` (rendered as SQL `null`) or as the
//! field's neutral value (`0` companions, `[]` interests).

pub mod companions;
pub mod date;
pub mod email;
pub mod escape;
pub mod identifier;
pub mod interests;
pub mod phone;

pub use companions::parse_accompanying_count;
pub use date::parse_visit_date;
pub use email::validate_email;
pub use escape::escape_sql_string;
pub use identifier::generate_id;
pub use interests::parse_area_of_interest;
pub use phone::clean_phone;
