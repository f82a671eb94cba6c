//! Jupiter placements: growth, luck, and abundance.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Jupiter,
        title: "ARIES",
        subtitle: Some("Jupiter in Aries"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Aries finds fortune at the starting line. Luck favors your leaps: the cold call, the first offer, the door opened before it was officially unlocked. Providence here rewards audacity and penalizes hesitation with silence.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by initiating and learning in public. The expansion trap is starting ten futures and inhabiting none; the discipline of finishing is where your luck compounds instead of scatters.",
            },
        ],
        traits: &["bold", "initiating", "self-made", "fast-expanding"],
        strengths: &["fortune favors its nerve", "inspires by example", "converts risk into story"],
        challenges: &["overreach at launch", "abandons mid-blessing", "confidence outruns capacity"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Jupiter,
        title: "TAURUS",
        subtitle: Some("Jupiter in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Taurus grows wealth the way orchards grow: slowly, compoundingly, with excellent lunches along the way. Luck arrives through patience, property, and the quality thing bought once. Your abundance has a deed and a recipe.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You expand by consolidating — each gain banked, each comfort earned. The trap is confusing accumulation with growth; sometimes the blessing requires selling the field you were camped in.",
            },
        ],
        traits: &["abundant", "steady", "appreciative", "acquisitive"],
        strengths: &["compounds everything touched", "generosity with substance", "luck through patience"],
        challenges: &["hoards the harvest", "comfort caps the climb", "slow to release the outgrown"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Jupiter,
        title: "GEMINI",
        subtitle: Some("Jupiter in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Gemini finds fortune in the network. Luck arrives as the introduction, the overheard tip, the newsletter actually read. Your providence is distributed: many small doors rather than one gate.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by cross-pollination — every field you skim fertilizes another. The expansion trap is a thousand open tabs and no thesis; your luck matures the moment curiosity acquires an editor.",
            },
        ],
        traits: &["connected", "curious", "versatile", "scattered"],
        strengths: &["opportunity via conversation", "learns its way into luck", "doors open in multiples"],
        challenges: &["breadth without banking", "optimism changes subject", "wisdom stays anecdotal"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Jupiter,
        title: "CANCER",
        subtitle: Some("Jupiter in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter is exalted in Cancer: fortune flows through care. Luck arrives via family, homes, and the people you once fed who never forgot. What you shelter multiplies; generosity returns here with interest and a casserole.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by enlarging the circle of 'my people' — every expansion of the table expands the blessing. The trap is protective hoarding; abundance kept behind the seawall quietly stops being abundant.",
            },
        ],
        traits: &["nurturing", "protective", "rooted", "expansive-hearted"],
        strengths: &["generosity that multiplies", "luck through kin and home", "emotional wealth as real wealth"],
        challenges: &["guards the granary", "family as whole horizon", "growth stalls in the harbor"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Jupiter,
        title: "LEO",
        subtitle: Some("Jupiter in Leo"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Leo finds fortune on stage. Luck arrives with visibility: the performance someone important attended, the generosity that became legend, the confidence that booked the room before the act was ready. Providence loves your lighting.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by giving magnificently and leading warmly; patronage is your native economy. The trap is expansion for applause — the kingdom enlarges, the king meanwhile unexamined.",
            },
        ],
        traits: &["magnanimous", "confident", "radiant", "grand"],
        strengths: &["luck follows the spotlight", "generosity at scale", "faith in self that funds itself"],
        challenges: &["spectacle over substance", "pride inflates with fortune", "applause as the metric"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Jupiter,
        title: "VIRGO",
        subtitle: Some("Jupiter in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Virgo hides fortune in the fine print. Luck arrives through craft, service, and the detail everyone else skipped; your big break usually looks like someone finally auditing the books. Providence pays you in competence compounding.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by perfecting systems until they scale without you. The trap is shrinking the vision to fit the checklist — sometimes the blessing is in the rough draft you were too careful to ship.",
            },
        ],
        traits: &["meticulous", "serviceable", "improving", "modest"],
        strengths: &["luck earned through craft", "growth that actually functions", "abundance via usefulness"],
        challenges: &["dreams cut to spec", "misses the windfall auditing it", "humility underprices the gift"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Jupiter,
        title: "LIBRA",
        subtitle: Some("Jupiter in Libra"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Libra finds fortune in the pairing. Luck arrives through partners, introductions, and the fairness that made someone decide you were worth backing. Doors open for you two at a time.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow through collaboration and principled compromise; justice projects enlarge you. The trap is outsourcing the expansion — waiting for the right partner to start the life already assigned to you.",
            },
        ],
        traits: &["gracious", "allied", "fair-dealing", "popular"],
        strengths: &["fortune through relationships", "diplomacy that enlarges", "shared ventures flourish"],
        challenges: &["luck deferred to partners", "harmony over bold asks", "grows only in company"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Jupiter,
        title: "SCORPIO",
        subtitle: Some("Jupiter in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Scorpio finds fortune in the depths others avoid: crises, turnarounds, inheritances literal and psychological. Luck arrives after the plunge — the ruin you were trusted to manage, the secret you kept that became a throne.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow through transformation, profiting from every death of an old self. The trap is controlling the blessing; abundance here must be trusted, not surveilled, or it goes back underground.",
            },
        ],
        traits: &["profound", "strategic", "regenerative", "reserved"],
        strengths: &["wealth from the depths", "luck in crisis", "transformative faith"],
        challenges: &["trust gates the gifts", "power shadows the blessing", "shares the harvest reluctantly"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Jupiter,
        title: "SAGITTARIUS",
        subtitle: Some("Jupiter in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter rules Sagittarius, and fortune here travels at full tilt: foreign shores, higher degrees, publishers, pulpits, and improbable rescues at the eleventh hour. You are the person lightning misses and lotteries remember.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by going — distance is a nutrient. The trap is perpetual departure: blessings keep arriving at addresses you have already left. Occasionally the horizon is where you are standing.",
            },
        ],
        traits: &["fortunate", "far-ranging", "faithful", "excessive"],
        strengths: &["luck as a climate", "vision that recruits providence", "optimism vindicated repeatedly"],
        challenges: &["promises outpace planes", "excess as philosophy", "never home for the delivery"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Jupiter,
        title: "CAPRICORN",
        subtitle: Some("Jupiter in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Capricorn runs fortune through underwriting. Luck arrives as the promotion earned twice over, the institution that finally noticed, the compound interest of never missing a deadline. Providence pays on delivery here, not on promise.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by building structures bigger than your tenure. The trap is auditing every blessing until it withdraws; abundance sometimes requires accepting the unearned gift without filing it as debt.",
            },
        ],
        traits: &["earned", "structural", "prudent", "enduring"],
        strengths: &["luck that survives audits", "growth with foundations", "fortune through reputation"],
        challenges: &["discounts the windfall", "austerity caps the blessing", "joy deferred past redemption"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Jupiter,
        title: "AQUARIUS",
        subtitle: Some("Jupiter in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Aquarius finds fortune in the collective. Luck arrives through communities, movements, and the strange idea that turned out to be five years early rather than wrong. Your providence is crowdsourced.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow by enlarging what everyone gets, not what you keep; abundance here is a network effect. The trap is loving humanity in the macro while the micro waits for a reply.",
            },
        ],
        traits: &["visionary", "collective-minded", "inventive", "impersonal"],
        strengths: &["fortune via community", "early to the future", "generosity at system scale"],
        challenges: &["personal luck left unclaimed", "abstraction over neighbors", "movements over relationships"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Jupiter,
        title: "PISCES",
        subtitle: Some("Jupiter in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("Where Luck Lives"),
                content: "Jupiter in Pisces — the old ruler home in the deep — finds fortune in surrender. Luck arrives as grace: the stranger's kindness, the art that paid rent, the rescue you could never have engineered. The universe keeps a tab open for you.",
            },
            ContentSection {
                heading: Some("Growth Edge"),
                content: "You grow through compassion and imagination; giving is your investment strategy and it inexplicably works. The trap is faith without a rudder — providence favors your surrender but still appreciates a heading.",
            },
        ],
        traits: &["graced", "compassionate", "boundless", "trusting"],
        strengths: &["kindness that returns multiplied", "imagination as fortune", "rescued at the brink, repeatedly"],
        challenges: &["boundaries of the blessing blur", "faith without follow-through", "generosity past solvency"],
    },
];
