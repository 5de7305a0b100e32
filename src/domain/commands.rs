//! Domain-level command and query types.
//!
//! These structs are the inputs and outputs of [`ContactService`]
//! (`crate::domain::contact_service::ContactService`). The REPL layer is
//! responsible for mapping tokenized user input to these internal types and
//! for rendering the results.

pub mod contact {
    /// Input for creating a contact or adding a phone to an existing one.
    #[derive(Debug, Clone)]
    pub struct AddContactCommand {
        pub name: String,
        pub phone: Option<String>,
    }

    /// Result of an add: whether a new contact was created or an existing
    /// one updated.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AddContactResult {
        pub created: bool,
    }

    /// Input for replacing one phone number with another.
    #[derive(Debug, Clone)]
    pub struct ChangePhoneCommand {
        pub name: String,
        pub old_phone: String,
        pub new_phone: String,
    }

    /// Result of a phone change.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ChangePhoneResult {
        pub success_message: String,
    }

    /// Query for a contact's phone numbers.
    #[derive(Debug, Clone)]
    pub struct ShowPhonesQuery {
        pub name: String,
    }

    /// Phone numbers for one contact, in the order they were added.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ShowPhonesResult {
        pub name: String,
        pub phones: Vec<String>,
    }

    /// Input for removing a contact.
    #[derive(Debug, Clone)]
    pub struct DeleteContactCommand {
        pub name: String,
    }

    /// Result of deleting a contact.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DeleteContactResult {
        pub success_message: String,
    }

    /// Rendered lines for every contact, in insertion order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ListContactsResult {
        pub lines: Vec<String>,
    }
}

pub mod birthday {
    use chrono::NaiveDate;

    /// Input for setting a contact's birthday.
    #[derive(Debug, Clone)]
    pub struct AddBirthdayCommand {
        pub name: String,
        pub birthday: String,
    }

    /// Result of setting a birthday.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AddBirthdayResult {
        pub success_message: String,
    }

    /// Query for a contact's stored birthday.
    #[derive(Debug, Clone)]
    pub struct ShowBirthdayQuery {
        pub name: String,
    }

    /// A contact's birthday formatted `DD.MM.YYYY`, or `None` if unset.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ShowBirthdayResult {
        pub name: String,
        pub birthday: Option<String>,
    }

    /// Query for birthdays falling within the next week of `today`.
    #[derive(Debug, Clone)]
    pub struct UpcomingBirthdaysQuery {
        pub today: NaiveDate,
    }

    /// Result of the upcoming-birthday query, in address book order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UpcomingBirthdaysResult {
        pub upcoming: Vec<crate::domain::address_book::UpcomingBirthday>,
    }
}
