//! Static reference data behind the selection controls: Indian states and
//! union territories with their cities, and the legal case categories.
//!
//! Both tables are ordered as they appear in the dropdowns and never change
//! at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub localities: &'static [&'static str],
}

pub const REGIONS: &[Region] = &[
    Region {
        name: "Maharashtra",
        localities: &["Mumbai", "Pune", "Nashik", "Nagpur", "Aurangabad", "Thane"],
    },
    Region {
        name: "Goa",
        localities: &["Panaji", "Mapusa", "Madgaon", "Vasco da Gama", "Margao"],
    },
    Region {
        name: "Gujarat",
        localities: &["Ahmedabad", "Vadodara", "Surat", "Rajkot", "Bhavnagar", "Gandhinagar"],
    },
    Region {
        name: "Kerala",
        localities: &["Kozhikode", "Thiruvananthapuram", "Kochi", "Kottayam", "Thrissur", "Kollam"],
    },
    Region {
        name: "Uttar Pradesh",
        localities: &["Lucknow", "Kanpur", "Varanasi", "Agra", "Allahabad", "Gorakhpur", "Meerut"],
    },
    Region {
        name: "Bihar",
        localities: &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Munger"],
    },
    Region {
        name: "Tamil Nadu",
        localities: &[
            "Chennai",
            "Coimbatore",
            "Madurai",
            "Trichy",
            "Salem",
            "Tirunelveli",
            "Erode",
        ],
    },
    Region {
        name: "West Bengal",
        localities: &["Kolkata", "Siliguri", "Asansol", "Durgapur", "Howrah"],
    },
    Region {
        name: "Rajasthan",
        localities: &["Jaipur", "Udaipur", "Jodhpur", "Kota", "Ajmer", "Bikaner", "Bhilwara"],
    },
    Region {
        name: "Madhya Pradesh",
        localities: &["Bhopal", "Indore", "Gwalior", "Jabalpur", "Ujjain", "Sagar"],
    },
    Region {
        name: "Punjab",
        localities: &["Chandigarh", "Amritsar", "Ludhiana", "Jalandhar", "Patiala"],
    },
    Region {
        name: "Haryana",
        localities: &["Gurugram", "Faridabad", "Hisar", "Ambala", "Karnal"],
    },
    Region {
        name: "Delhi",
        localities: &["New Delhi", "Delhi Cantonment", "Dwarka", "Karol Bagh", "Connaught Place"],
    },
    Region {
        name: "Andhra Pradesh",
        localities: &["Visakhapatnam", "Vijayawada", "Guntur", "Tirupati", "Kakinada"],
    },
    Region {
        name: "Telangana",
        localities: &["Hyderabad", "Warangal", "Khammam", "Karimnagar", "Nizamabad"],
    },
    Region {
        name: "Karnataka",
        localities: &["Bengaluru", "Mysuru", "Mangalore", "Hubli", "Belagavi"],
    },
    Region {
        name: "Uttarakhand",
        localities: &["Dehradun", "Nainital", "Haridwar", "Rishikesh", "Roorkee"],
    },
    Region {
        name: "Himachal Pradesh",
        localities: &["Shimla", "Manali", "Kullu", "Dharamshala", "Kangra"],
    },
    Region {
        name: "Chhattisgarh",
        localities: &["Raipur", "Bilaspur", "Korba", "Durg", "Jagdalpur"],
    },
    Region {
        name: "Jharkhand",
        localities: &["Ranchi", "Jamshedpur", "Dhanbad", "Hazaribagh", "Bokaro Steel City"],
    },
    Region {
        name: "Odisha",
        localities: &["Bhubaneswar", "Cuttack", "Berhampur", "Rourkela", "Puri"],
    },
    Region {
        name: "Assam",
        localities: &["Guwahati", "Dibrugarh", "Jorhat", "Silchar", "Nagaon"],
    },
    Region {
        name: "Nagaland",
        localities: &["Kohima", "Dimapur"],
    },
    Region {
        name: "Meghalaya",
        localities: &["Shillong", "Tura", "Jowai"],
    },
    Region {
        name: "Arunachal Pradesh",
        localities: &["Itanagar", "Tawang", "Ziro"],
    },
    Region {
        name: "Mizoram",
        localities: &["Aizawl", "Lunglei", "Champhai"],
    },
    Region {
        name: "Tripura",
        localities: &["Agartala", "Udaipur", "Ambassa"],
    },
    Region {
        name: "Manipur",
        localities: &["Imphal", "Thoubal", "Churachandpur"],
    },
    Region {
        name: "Sikkim",
        localities: &["Gangtok", "Namchi", "Jorethang"],
    },
    Region {
        name: "Lakshadweep",
        localities: &["Kavaratti", "Agatti", "Minicoy"],
    },
    Region {
        name: "Andaman and Nicobar Islands",
        localities: &["Port Blair", "Diglipur", "Havelock"],
    },
    Region {
        name: "Jammu and Kashmir",
        localities: &["Srinagar", "Jammu", "Anantnag", "Baramulla"],
    },
    Region {
        name: "Puducherry",
        localities: &["Puducherry", "Karaikal", "Mahe", "Yanam"],
    },
    Region {
        name: "Chandigarh",
        localities: &["Chandigarh"],
    },
];

pub const CATEGORIES: &[&str] = &[
    "Adoption and surrogacy law",
    "Alternative dispute resolution (ADR) and arbitration",
    "Antitrust and competition law",
    "Banking and financial regulations",
    "Bankruptcy and insolvency cases",
    "Civil rights violations (Discrimination, Police brutality)",
    "Consumer credit and debt collection",
    "Consumer protection and unfair trade practices",
    "Contract disputes and breaches",
    "Criminal defense and prosecution",
    "Cybercrime and data protection laws",
    "Cybersecurity laws and hacking cases",
    "Defamation and libel",
    "Employment law (Wages, Employee rights, Workplace discrimination)",
    "Environmental law and regulations",
    "Family law (Divorce, Child custody, Alimony)",
    "Fraudulent practices and scams",
    "Freedom of speech and expression (Censorship)",
    "Harassment claims (e.g., sexual harassment)",
    "Immigration law and visas",
    "Insurance claims and disputes",
    "Intellectual property (Patents, copyrights, trade secrets)",
    "Land acquisition and compensation issues",
    "Medical malpractice and negligence claims",
    "Pollution and contamination cases",
    "Personal injury and compensation claims",
    "Pollution and environmental contamination cases",
    "Public international law (Treaties, Diplomatic immunity)",
    "Real estate disputes (Property rights, Landlord-tenant issues)",
    "Securities and investment fraud",
    "Sports law (Contracts, Player disputes)",
    "Tax law and disputes",
    "Trademark registration and infringement",
    "Wills, trusts, and estate planning",
    "Workplace discrimination and employment claims",
    "Whistleblower claims and retaliation",
    "Consumer fraud and deceptive practices",
    "Product liability and safety claims",
    "Medical ethics and malpractice",
    "Negotiation and settlement law",
    "Mergers and acquisitions law",
    "Privacy law and data breach",
    "Regulatory compliance (industry-specific)",
    "Real estate law (Zoning, Property disputes)",
    "Debt recovery and collections",
    "Foreign investments and cross-border disputes",
    "Landlord-tenant disputes",
    "Legal malpractice and ethics violations",
    "Municipal law (Local governance, Zoning laws)",
    "Criminal appeals and post-conviction cases",
    "International arbitration and dispute resolution",
    "Social justice and civil liberties",
    "Consumer rights in e-commerce",
];

/// Region names in dropdown order.
pub fn regions() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|r| r.name)
}

pub fn default_region() -> &'static Region {
    &REGIONS[0]
}

pub fn find_region(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

pub fn localities(region: &str) -> Option<&'static [&'static str]> {
    find_region(region).map(|r| r.localities)
}

pub fn is_locality_of(region: &str, locality: &str) -> bool {
    localities(region).is_some_and(|ls| ls.contains(&locality))
}

pub fn is_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn regions_are_unique_and_populated() {
        let mut seen = HashSet::new();
        for region in REGIONS {
            assert!(seen.insert(region.name), "duplicate region {}", region.name);
            assert!(!region.localities.is_empty(), "{} has no cities", region.name);

            let unique: HashSet<_> = region.localities.iter().collect();
            assert_eq!(
                unique.len(),
                region.localities.len(),
                "duplicate city in {}",
                region.name
            );
        }
    }

    #[test]
    fn categories_are_unique() {
        let unique: HashSet<_> = CATEGORIES.iter().collect();
        assert_eq!(unique.len(), CATEGORIES.len());
        assert_eq!(CATEGORIES.len(), 53);
    }

    #[test]
    fn regions_keep_dropdown_order() {
        let names: Vec<_> = regions().take(3).collect();
        assert_eq!(names, vec!["Maharashtra", "Goa", "Gujarat"]);
        assert_eq!(default_region().name, "Maharashtra");
    }

    #[test]
    fn bengal_alias_folds_into_west_bengal() {
        assert!(find_region("Bengal").is_none());
        assert_eq!(
            localities("West Bengal"),
            Some(&["Kolkata", "Siliguri", "Asansol", "Durgapur", "Howrah"][..])
        );
    }

    #[test]
    fn locality_lookup() {
        assert!(is_locality_of("Kerala", "Kochi"));
        assert!(!is_locality_of("Kerala", "Mumbai"));
        assert!(!is_locality_of("Atlantis", "Kochi"));
        // Same city name may appear under two states.
        assert!(is_locality_of("Rajasthan", "Udaipur"));
        assert!(is_locality_of("Tripura", "Udaipur"));
    }

    #[test]
    fn category_lookup() {
        assert!(is_category("Consumer protection and unfair trade practices"));
        assert!(!is_category("consumer protection and unfair trade practices"));
        assert!(!is_category(""));
    }
}
