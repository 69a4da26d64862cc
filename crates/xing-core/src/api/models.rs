// Field registries for XING resources

/// Every field the users endpoints can return.
///
/// Requests that carry a `user_fields` parameter without a value ask for
/// all of these.
pub const AVAILABLE_USER_FIELDS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "display_name",
    "page_name",
    "permalink",
    "employment_status",
    "gender",
    "birth_date",
    "active_email",
    "time_zone",
    "premium_services",
    "badges",
    "wants",
    "haves",
    "interests",
    "organisation_member",
    "languages",
    "private_address",
    "business_address",
    "web_profiles",
    "instant_messaging_accounts",
    "professional_experience",
    "educational_background",
    "photo_urls",
];

/// Comma-joined form of [`AVAILABLE_USER_FIELDS`], as the API expects it
pub fn all_user_fields() -> String {
    AVAILABLE_USER_FIELDS.join(",")
}
