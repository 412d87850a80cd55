//! Seed content of the directory.
//!
//! A handful of featured operators carry hand written details and reviews.
//! The rest come from a plain list of display names; a name may end with
//! ` (N)` to attach `N` placeholder reviews to it.

use crate::{
    catalog::{Catalog, CatalogError},
    data::{Operator, Ratings, Review},
};

struct Featured {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    hq: &'static str,
    fleet_size: u32,
    website: &'static str,
}

const FEATURED: &[Featured] = &[
    Featured {
        id: "netjets",
        name: "NetJets",
        description: "The world's largest private jet company, offering fractional ownership, leasing, and jet card programs. Known for its vast fleet and consistent service.",
        hq: "Columbus, Ohio, USA",
        fleet_size: 750,
        website: "https://www.netjets.com/",
    },
    Featured {
        id: "flexjet",
        name: "Flexjet",
        description: "A premium private jet travel provider offering fractional ownership, leasing, and jet cards. Famous for its \"Red Label\" experience with dedicated crews and custom interiors.",
        hq: "Cleveland, Ohio, USA",
        fleet_size: 160,
        website: "https://www.flexjet.com/",
    },
    Featured {
        id: "vistajet",
        name: "VistaJet",
        description: "A global private aviation company with a subscription-based model. VistaJet owns its entire fleet of silver and red Bombardier jets, ensuring a consistent experience worldwide.",
        hq: "Luqa, Malta",
        fleet_size: 360,
        website: "https://www.vistajet.com/",
    },
    Featured {
        id: "wheelsup",
        name: "Wheels Up",
        description: "A membership-based private aviation company known for its user-friendly app and dynamic pricing. Offers a diverse fleet for on-demand charters.",
        hq: "New York, New York, USA",
        fleet_size: 350,
        website: "https://www.wheelsup.com/",
    },
    Featured {
        id: "jet-edge",
        name: "Jet Edge",
        description: "A leader in large-cabin and super-midsize private jet travel, specializing in charter, aircraft management, and sales. Operates one of the largest charter fleets in the U.S.",
        hq: "Van Nuys, California, USA",
        fleet_size: 100,
        website: "https://www.flyjetedge.com/",
    },
    Featured {
        id: "airshare",
        name: "Airshare",
        description: "Offers fractional ownership and jet cards primarily focused on the Bombardier Challenger and Embraer Phenom series. Known for its regional focus and efficiency.",
        hq: "Overland Park, Kansas, USA",
        fleet_size: 50,
        website: "https://www.flyairshare.com/",
    },
    Featured {
        id: "zenflight",
        name: "Zenflight",
        description: "Boutique private jet service focusing on wellness and serene travel experiences. Offers curated journeys with a holistic approach to luxury.",
        hq: "Farmingdale, NY, USA",
        fleet_size: 25,
        website: "https://www.flyzenflight.com/",
    },
    Featured {
        id: "thrive",
        name: "Thrive",
        description: "Next-generation private aviation focused on sustainable and carbon-neutral flights. A modern fleet with a strong commitment to environmental responsibility.",
        hq: "Las Vegas, NV, USA",
        fleet_size: 40,
        website: "https://www.flythrive.com/",
    },
];

// (operator id, review id, author, avatar, date, comment, [overall, safety, service, punctuality, value])
type WrittenReview = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    [f64; 5],
);

const WRITTEN_REVIEWS: &[WrittenReview] = &[
    (
        "netjets",
        "rev-nj-1",
        "Alex Johnson",
        "user-avatar-1",
        "2023-10-15",
        "Impeccable service and attention to detail. The crew was professional and the flight was incredibly smooth. Worth every penny for the peace of mind and luxury.",
        [5.0, 5.0, 5.0, 5.0, 4.0],
    ),
    (
        "netjets",
        "rev-nj-2",
        "Samantha Bee",
        "user-avatar-2",
        "2023-09-22",
        "Consistently reliable. We've used NetJets for years for business travel. They have never missed a beat. Aircraft are always pristine.",
        [5.0, 5.0, 5.0, 5.0, 5.0],
    ),
    (
        "flexjet",
        "rev-fj-1",
        "Michael Chen",
        "user-avatar-3",
        "2023-11-01",
        "The Red Label experience is unmatched. The interiors are stunning and the crews are top-notch. A slight delay on arrival but they handled it professionally.",
        [4.0, 5.0, 5.0, 4.0, 4.0],
    ),
    (
        "vistajet",
        "rev-vj-1",
        "Emily Rodriguez",
        "user-avatar-4",
        "2023-10-28",
        "Truly a global service. Flew from New York to Dubai and it was seamless. The onboard experience felt like a five-star hotel in the sky.",
        [5.0, 5.0, 5.0, 5.0, 4.0],
    ),
    (
        "vistajet",
        "rev-vj-2",
        "Alex Johnson",
        "user-avatar-1",
        "2023-08-12",
        "Excellent fleet, always clean and modern. The booking process can be a little rigid at times, but the in-flight service makes up for it.",
        [4.0, 5.0, 5.0, 5.0, 3.0],
    ),
    (
        "wheelsup",
        "rev-wu-1",
        "Samantha Bee",
        "user-avatar-2",
        "2023-09-05",
        "Great for short-haul domestic flights. The app is easy to use for booking. However, catering options could be improved.",
        [4.0, 4.0, 4.0, 5.0, 4.0],
    ),
    (
        "jet-edge",
        "rev-je-1",
        "Michael Chen",
        "user-avatar-3",
        "2023-07-19",
        "The large-cabin jets are fantastic for transcontinental trips. Very spacious and well-appointed. Crew was friendly and professional.",
        [5.0, 5.0, 5.0, 5.0, 4.0],
    ),
    (
        "airshare",
        "rev-as-1",
        "Emily Rodriguez",
        "user-avatar-4",
        "2023-11-05",
        "The fractional program is a good value proposition. Perfect for regional travel. The Phenom 300 is a workhorse. Solid, reliable service.",
        [4.0, 5.0, 4.0, 5.0, 5.0],
    ),
];

// (operator id, review id prefix, count)
const BULK_REVIEWS: &[(&str, &str, usize)] = &[
    ("executive-jet-management-inc", "rev-ejm", 33),
    ("jet-linx-aviation-llc", "rev-jla", 26),
    ("solairus-aviation", "rev-sa", 22),
    ("jet-aviation-flight-services-inc", "rev-jafs", 7),
    ("silver-air", "rev-sair", 7),
    ("executive-fliteways", "rev-ef", 6),
    ("talon-air-llc", "rev-ta", 6),
    ("vista-us", "rev-vus", 6),
];

const BULK_RATINGS: Ratings = Ratings {
    overall: 4.5,
    safety: 5.0,
    service: 4.0,
    punctuality: 4.0,
    value: 4.0,
};

const PLACEHOLDER_RATINGS: Ratings = Ratings {
    overall: 4.0,
    safety: 5.0,
    service: 4.0,
    punctuality: 4.0,
    value: 3.0,
};

const LISTED: &[&str] = &[
    "45 North Flight", "A-OK Jets", "AAC JET", "Accent Airways LLC", "Advanced Air LLC", "AEM Aviation", "Aero",
    "Aero Charter, Inc.", "Aero Dynamic Jets", "Air 7 LLC", "Air Center Helicopters, Inc.", "Air Fuga",
    "Aircharters Worldwide", "Aircraft Management Group, Inc.", "Aircraft Services Group, Inc.",
    "Aircraft Transport Service", "Alerion Aviation", "American Air Charter Inc.", "Aviation Advisor, Inc.",
    "Aviation Charters, Inc.", "Axis Jet", "Baker Aviation, LLC", "Blue Skies Aviation & Logistics LLC",
    "Buffalo River Aviation LLC", "Business Jet Services", "Central American Airways Flying Service, Inc",
    "Chairman Airmotive II LLC", "Charter Airlines, LLC", "Chicago Jet Group", "Cirrus Aviation Services",
    "Club Jet Charter, LLC", "Contour Aviation", "Cove Aviation Partners LLC", "Craft", "CTP Aviation",
    "Cutter Flight Management, Inc.", "Davinci Jets, LLC", "Dolphin Atlantic, Inc", "Dominion Aviation Services, LLC",
    "Dreamline Aviation, LLC", "DuPage Aerospace", "EA-Americas", "EAS Charter", "East Coast Flight Services, Inc.",
    "Elevate Jet", "Elite Air, Inc.", "Execuflight Inc", "Executive Fliteways", "Executive Jet Management, Inc.",
    "Exodus Aircraft, LLC", "Fair Wind Air Charter", "FlightWorks", "FliteAccess, LLC", "Fly Advanced Jet",
    "Fly Alliance", "Fly Business Aviation", "flyExclusive", "FlyHouse", "FLYTRU", "FlyUSA", "Global Air Charters",
    "Goodjet", "Hangar 7 Aviation", "Haven Aero, LLC", "Hera Flight", "Hop-A-Jet World Wide Jet Charter, Inc",
    "Jackson Jet Center", "Jet 1", "Jet Access Aviation, LLC", "Jet Aviation Flight Services, Inc.", "Jet Excellence",
    "Jet Linx Aviation, LLC", "Jet Ten Private Jet Charter", "Jet-A, LLC", "JetsPlus", "JetUp Aviation, LLC",
    "Journey Aviation, LLC", "Justice Air Charter", "Kalitta Charters LLC", "Latitude 33 Aviation, LLC",
    "Let's Jett, Inc", "Liberty Charter Services, LLC", "Liberty Jet", "Lone Star Aviators, LLC", "Lyon Aviation",
    "M&N Aviation", "Mach One Air Charters Inc.", "Mach Point Aviation", "Maine Aviation Aircraft Charter, LLC.",
    "MANext", "MARTINAIR INC.", "Meregrass, Inc.", "MIA JETS", "MV Jets", "NICHOLAS SERVICES LLC",
    "Northeastern Aviation Corp", "Northern Jet Management", "Paradigm Jet Management", "Paragon Airways",
    "Pegasus Elite Aviation", "Pentastar Aviation Charter, Inc.", "Phoenix Air Group Inc", "Pinnacle Aviation",
    "Planet 9", "Planet 9 (UK)", "Polaris Aviation Solutions, LLC", "Precision Aircraft Management",
    "Premier Air Charter INC", "Presidential Aviation, Inc.", "Priester Aviation, LLC", "Prime Jet, LLC",
    "PrismJet, LLC", "Private Flite Aviation", "Private Jet Center", "PROAV Charters", "Quantum Jets",
    "RAI Jets, LLC.", "Reliance Jets", "Rennia Aviation, LLC", "Reynolds Jet Management", "Royal Flight Club",
    "Santos Jet", "Saturn Aviation, LLC", "SC Aviation Inc.", "Schubach Aviation", "Sentient Jet", "Sherpa Air",
    "Shoreline Aviation Inc", "Short Hills Aviation Services, Inc.", "Silver Air", "Siskiyou Aviation LLC",
    "Sky Partners, Inc", "Skybird Aviation", "Skyshare", "Skyward Aviation", "Skyways Charter LLC",
    "Solairus Aviation", "Soulbird Aviation, LLC", "STA Jets", "Starjet, Inc.", "Stark Airways, LLC", "Sun Air Jets",
    "SURJET", "Talon Air, LLC.", "Thrive Aviation", "Tradewind Charter LLC", "Trans-Exec Air Service, Inc.",
    "Triton Airways, LLC", "TurnKey Jet, Inc", "United States Aviation Company", "Ventura Air Services", "Vista US",
    "Waltzing Matilda Aviation, LLC", "Wheels Up Private Jets LLC", "Wing Aviation Charter Services LLC",
    "Wingtip Corporation dba Wingtip Aviation", "Worldwide Jet Charter, Inc.", "XPro Jet Charters",
];

/// Build the directory catalog from the seed content.
pub fn catalog() -> Result<Catalog, CatalogError> {
    let mut operators: Vec<Operator> = FEATURED.iter().map(featured_operator).collect();
    operators.extend(LISTED.iter().map(|name| listed_operator(name)));

    for (id, review_id, author, avatar, date, comment, [overall, safety, service, punctuality, value]) in
        WRITTEN_REVIEWS
    {
        let Some(op) = operators.iter_mut().find(|op| op.id == *id) else {
            tracing::warn!("seed review for unknown operator {id}");
            continue;
        };
        let review = Review {
            id: review_id.to_string(),
            author: author.to_string(),
            avatar_id: avatar.to_string(),
            date: date.to_string(),
            comment: comment.to_string(),
            ratings: Ratings {
                overall: *overall,
                safety: *safety,
                service: *service,
                punctuality: *punctuality,
                value: *value,
            },
        };
        op.reviews.push(review);
    }

    for (id, prefix, count) in BULK_REVIEWS {
        let Some(op) = operators.iter_mut().find(|op| op.id == *id) else {
            tracing::warn!("bulk reviews for unknown operator {id}");
            continue;
        };
        op.reviews.extend((1..=*count).map(|i| Review {
            id: format!("{prefix}-{i}"),
            author: "Anonymous".to_string(),
            avatar_id: avatar_for(i),
            date: "2023-10-01".to_string(),
            comment: "Generic review comment.".to_string(),
            ratings: BULK_RATINGS,
        }));
    }

    Catalog::new(operators)
}

/// Turn a display name into an operator id: lowercase, whitespace runs become
/// a single `-`, anything else outside `[a-z0-9-]` is dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

/// Split a trailing ` (N)` review count off a listed name.
fn split_review_count(name: &str) -> (&str, usize) {
    let parsed = name.strip_suffix(')').and_then(|rest| {
        let (head, digits) = rest.rsplit_once('(')?;
        let head = head.strip_suffix(|c: char| c.is_whitespace())?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some((head, digits.parse::<usize>().ok()?))
    });
    parsed.unwrap_or((name, 0))
}

fn avatar_for(i: usize) -> String {
    format!("user-avatar-{}", (i - 1) % 5 + 1)
}

fn featured_operator(f: &Featured) -> Operator {
    Operator {
        id: f.id.to_string(),
        name: f.name.to_string(),
        logo_id: format!("op-logo-{}", f.id),
        description: f.description.to_string(),
        hq: f.hq.to_string(),
        fleet_size: f.fleet_size,
        website: f.website.to_string(),
        reviews: Vec::new(),
    }
}

fn listed_operator(raw: &str) -> Operator {
    let (name, review_count) = split_review_count(raw);
    let slug = slugify(name);
    let reviews = (1..=review_count)
        .map(|i| Review {
            id: format!("rev-{slug}-{i}"),
            author: "Anonymous".to_string(),
            avatar_id: avatar_for(i),
            date: "2023-10-01".to_string(),
            comment: "Review placeholder.".to_string(),
            ratings: PLACEHOLDER_RATINGS,
        })
        .collect();

    Operator {
        logo_id: format!("op-logo-{slug}"),
        description: "A private jet operator offering charter services. More details coming soon."
            .to_string(),
        hq: "Location Varies".to_string(),
        fleet_size: 0,
        website: format!("https://www.{slug}.com/"),
        name: name.to_string(),
        id: slug,
        reviews,
    }
}
