//! String-backed status and kind values stored in the database.

use std::{fmt, str::FromStr};

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!(
                        "'{}' is not one of: {}",
                        other,
                        [$($value),+].join(", ")
                    )),
                }
            }
        }
    };
}

string_enum!(
    /// Soft-delete status shared by every inventory and billing table
    RecordStatus {
        Active => "active",
        Inactive => "inactive",
    }
);

string_enum!(
    /// Installment status
    PaymentStatus {
        Pending => "pending",
        Paid => "paid",
        Failed => "failed",
    }
);

string_enum!(
    /// Whether an item is billed on every charge or once
    PaymentType {
        Monthly => "monthly",
        OneTime => "one_time",
    }
);

string_enum!(
    UserRole {
        Admin => "admin",
        Branch => "branch",
    }
);

string_enum!(
    /// Tables a comment may be attached to
    CommentEntityType {
        Customer => "customer",
        Device => "device",
        SimCard => "sim_card",
        MonthlyPayment => "monthly_payment",
        Branch => "branch",
        User => "user",
    }
);
