use std::fmt;
use std::str::FromStr;

/// Tables of the CVKing database the toolkit knows about. Only these names
/// are ever spliced into SQL as identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum KnownTable {
    Users,
    Companies,
    Cvs,
    JobSeekerProfiles,
    Jobs,
    SubscriptionPlans,
}

impl KnownTable {
    pub const ALL: [KnownTable; 6] = [
        KnownTable::Users,
        KnownTable::Companies,
        KnownTable::Cvs,
        KnownTable::JobSeekerProfiles,
        KnownTable::Jobs,
        KnownTable::SubscriptionPlans,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownTable::Users => "users",
            KnownTable::Companies => "companies",
            KnownTable::Cvs => "cvs",
            KnownTable::JobSeekerProfiles => "job_seeker_profiles",
            KnownTable::Jobs => "jobs",
            KnownTable::SubscriptionPlans => "subscription_plans",
        }
    }
}

impl fmt::Display for KnownTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownTable {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnownTable::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown table: {}", s))
    }
}
