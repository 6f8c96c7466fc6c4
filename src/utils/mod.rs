pub mod emoji;
pub mod pin;
pub mod shuffle;
pub mod slug;
pub mod token;

pub use emoji::{EmojiPool, add_emoji_to_name, strip_emoji_prefix};
pub use pin::{hash_pin, validate_pin, verify_pin};
pub use shuffle::shuffle_assignments;
pub use slug::{generate_event_name, slugify_event_name};
pub use token::{assignment_url, generate_token};
