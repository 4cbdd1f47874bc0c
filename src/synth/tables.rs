//! Fixed lookup tables for the user generator
//!
//! Lengths matter: the index formulas in [`super::users`] take every
//! multiplier modulo these lengths, so the tables must stay as they are for
//! output to remain stable.

pub static FIRST_NAMES: [&str; 20] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Christopher", "Karen",
];

pub static LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin",
];

pub static CITIES: [&str; 20] = [
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
    "Fort Worth", "Columbus", "Indianapolis", "Charlotte", "San Francisco", "Seattle",
    "Denver", "Washington",
];

pub static STREETS: [&str; 20] = [
    "Main Street", "Oak Avenue", "Maple Drive", "Cedar Lane", "Pine Road", "Elm Street",
    "Washington Boulevard", "Park Avenue", "Lake Drive", "Hill Street", "River Road",
    "Forest Lane", "Spring Street", "Valley Road", "Mountain View", "Sunset Boulevard",
    "Broadway", "First Avenue", "Second Street", "Third Avenue",
];

pub static STATES: [&str; 20] = [
    "CA", "NY", "TX", "FL", "PA", "IL", "OH", "GA", "NC", "MI", "NJ", "VA", "WA", "AZ",
    "MA", "TN", "IN", "MO", "MD", "WI",
];

pub static COMPANIES: [&str; 15] = [
    "TechCorp", "GlobalSystems", "DataWorks", "CloudNine", "InnovateLabs", "FutureSync",
    "AlphaTech", "BetaSoft", "GammaIndustries", "DeltaSolutions", "EpsilonGroup",
    "ZetaDigital", "EtaTechnologies", "ThetaVentures", "IotaEnterprises",
];

pub static DEPARTMENTS: [&str; 15] = [
    "Engineering", "Sales", "Marketing", "Human Resources", "Finance", "Operations",
    "Customer Support", "Product Management", "Research and Development",
    "Quality Assurance", "Legal", "IT Support", "Business Development", "Accounting",
    "Administration",
];

pub static POSITIONS: [&str; 15] = [
    "Software Engineer", "Senior Developer", "Product Manager", "Sales Representative",
    "Marketing Specialist", "HR Manager", "Financial Analyst", "Operations Manager",
    "Support Specialist", "QA Engineer", "Team Lead", "Director", "Vice President",
    "Consultant", "Coordinator",
];

pub static TAGS: [&str; 15] = [
    "VIP", "Premium", "Enterprise", "Verified", "Active", "Beta", "EarlyAdopter",
    "Ambassador", "Partner", "Influencer", "Champion", "Leader", "Expert", "Mentor",
    "Contributor",
];
