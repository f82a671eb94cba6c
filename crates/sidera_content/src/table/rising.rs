//! Rising placements: first impressions and approach to the world.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Rising,
        title: "ARIES",
        subtitle: Some("Aries Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Aries Rising enters like a headline. People clock the pace first — the fast walk, the direct gaze, the sense that you are already mid-errand. You read as confident even on days you are not, which is both a shield and a misunderstanding generator.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "Your default interface is action: see door, open door, apologize to hinges later. Strangers get your candor before your context. Life rewards you for initiative and fines you, regularly, for the unread instructions.",
            },
        ],
        traits: &["direct", "energetic", "impatient", "unmistakable"],
        strengths: &["instant momentum", "reads as fearless", "cuts through social fog"],
        challenges: &["first impression runs hot", "leaps before looking", "wears others out"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Rising,
        title: "TAURUS",
        subtitle: Some("Taurus Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Taurus Rising arrives unhurried and somehow already settled in. People register calm, good taste, and a quality of presence that makes rooms feel sturdier. You look like someone who knows where the good bakery is, because you do.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You move at your own tempo and let the world adjust, which it usually does. New situations are assessed through comfort: where is the food, the exit, the decent chair. Once committed to a place or person, you become part of the architecture.",
            },
        ],
        traits: &["grounded", "unhurried", "pleasant", "immovable"],
        strengths: &["instantly trustworthy presence", "steady first and last", "aesthetic instinct"],
        challenges: &["slow to warm, slower to leave", "reads as passive", "routine hardens early"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Rising,
        title: "GEMINI",
        subtitle: Some("Gemini Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Gemini Rising leads with the voice: quick, curious, already asking your second question before your first answer lands. People remember you as younger than you are and busier than seems plausible. The nickname sticks before the surname registers.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "The world is a feed and you are scrolling it in person. You enter every room through conversation, exit through a tangent, and keep three plans in superposition. Commitment to an approach, like to a route, stays negotiable.",
            },
        ],
        traits: &["quick", "talkative", "youthful", "mercurial"],
        strengths: &["instant rapport", "thinks on its feet", "makes dull rooms interesting"],
        challenges: &["attention flickers visibly", "reads as flighty", "promises multiply"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Rising,
        title: "CANCER",
        subtitle: Some("Cancer Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Cancer Rising scans before it enters: who is safe, who is hungry, who needs a chair. People meet your warmth second and your wariness first, often without noticing the order. You feel familiar to strangers, like somebody's favorite relative.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You approach sideways, testing temperature through small kindnesses and careful questions. Environments imprint on you fast, so you curate them hard. Once a place earns 'home' status, you defend it like a shoreline.",
            },
        ],
        traits: &["warm", "guarded", "attentive", "homeward"],
        strengths: &["puts people at ease", "reads needs before they're spoken", "makes anywhere feel safe"],
        challenges: &["shyness reads as distance", "moods show on the surface", "over-adapts to the room"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Rising,
        title: "LEO",
        subtitle: Some("Leo Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Leo Rising is lit from within and knows where the camera is. People register presence before particulars: the posture, the hair, the sense of an entrance even through a side door. You are remembered at parties you barely attended.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You meet the world as a stage with manners: generous, performative, and quietly keeping score of who applauded. Dignity is your navigation system. The warmth is real; so is the requirement that it be noticed.",
            },
        ],
        traits: &["magnetic", "dignified", "expressive", "sunlit"],
        strengths: &["commands rooms effortlessly", "generous host energy", "style as a first language"],
        challenges: &["needs the room's attention", "pride answers the door", "performance hides the person"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Rising,
        title: "VIRGO",
        subtitle: Some("Virgo Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Virgo Rising arrives composed, observant, and faintly evaluating — people sense they are being proofread, gently. You present as capable before you present as anything else. Clutter, in rooms or arguments, visibly pains you.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You enter situations through their logistics: what needs doing, what is broken, where the list is. Helpfulness is your handshake. The world mistakes your precision for coolness until it needs something fixed, at which point you become indispensable.",
            },
        ],
        traits: &["polished", "observant", "modest", "methodical"],
        strengths: &["instantly useful", "calm competence", "notices everything"],
        challenges: &["reads as critical", "self-effacing to a fault", "relaxing in public takes effort"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Rising,
        title: "LIBRA",
        subtitle: Some("Libra Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Libra Rising is the best-lit person at the table and the easiest to sit beside. People meet symmetry: good manners, good angles, a smile calibrated to the room. You are everyone's first pick for 'seems lovely,' which you are, strategically.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You approach the world as a negotiation to be kept pleasant. Mirroring is reflex; you become slightly whoever you are with, then wonder where you went. Decisions are outsourced to consensus whenever consensus will take the call.",
            },
        ],
        traits: &["charming", "poised", "accommodating", "undecided"],
        strengths: &["universal social access", "defuses tension on arrival", "impeccable presentation"],
        challenges: &["agreeable past the point of truth", "decision latency", "self blurs into company"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Rising,
        title: "SCORPIO",
        subtitle: Some("Scorpio Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Scorpio Rising is felt before it is understood: a density in the gaze, a sense of withheld information. People either lean in or step back; nobody stays neutral. You are routinely described as intimidating by people you have not yet spoken to.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You enter rooms in reconnaissance mode, cataloging exits and agendas. Control of your own disclosure is non-negotiable — the world gets the trailer, never the film. Trust converts you from fortress to stronghold ally.",
            },
        ],
        traits: &["intense", "reserved", "penetrating", "magnetic"],
        strengths: &["presence with gravity", "reads hidden agendas", "unshakable under scrutiny"],
        challenges: &["intimidates by default", "suspicion greets strangers", "lets almost no one in"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Rising,
        title: "SAGITTARIUS",
        subtitle: Some("Sagittarius Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Sagittarius Rising arrives mid-story, laughing, slightly late, visibly from somewhere else. People meet enthusiasm first and scheduling conflicts second. You make rooms bigger just by describing what is outside them.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "The world is an itinerary you have not finished writing. You approach strangers as future anecdotes and obstacles as detours with better views. Your honesty arrives unbraked, charming in the aggregate, alarming in the particular.",
            },
        ],
        traits: &["buoyant", "candid", "restless", "expansive"],
        strengths: &["instant warmth at scale", "optimism that recruits", "at ease anywhere on earth"],
        challenges: &["overbooked and overdrawn", "tact arrives late", "commitment kept loose"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Rising,
        title: "CAPRICORN",
        subtitle: Some("Capricorn Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Capricorn Rising reads as the adult in the room at every age. People meet reserve, good tailoring of one kind or another, and an air of having read the agenda in advance. You are trusted with responsibilities before you are trusted with jokes.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You approach life as terrain to be mapped and summited on schedule. First encounters are assessments; warmth is released incrementally, like equity vesting. The world eventually discovers the dry wit, and is always surprised.",
            },
        ],
        traits: &["composed", "authoritative", "reserved", "enduring"],
        strengths: &["instant credibility", "calm that steadies rooms", "built for responsibility"],
        challenges: &["reads as stern", "warmth heavily escrowed", "seriousness becomes armor"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Rising,
        title: "AQUARIUS",
        subtitle: Some("Aquarius Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Aquarius Rising registers as interestingly elsewhere: friendly, articulate, and tuned to a frequency the room has not discovered yet. People remember the unusual opinion and the unusual jacket. You are approachable in a way that resists follow-up.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You meet the world as an observer embedded with the humans, sympathetic but methodologically neutral. Groups adopt you as their interesting one. Conventions are obeyed selectively and documented for later critique.",
            },
        ],
        traits: &["distinctive", "amiable", "aloof", "original"],
        strengths: &["at home with any crowd", "disarms with oddness", "sees the room from above"],
        challenges: &["friendly but unreachable", "contrary on principle", "belongs everywhere, lands nowhere"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Rising,
        title: "PISCES",
        subtitle: Some("Pisces Rising"),
        sections: &[
            ContentSection {
                heading: Some("First Impressions"),
                content: "Pisces Rising arrives in soft focus: gentle eyes, ambient kindness, an outline the room cannot quite fix. People project freely onto you and are soothed by what they imagine they see. Strangers tell you their lives unprompted on public transport.",
            },
            ContentSection {
                heading: Some("Approach to the World"),
                content: "You drift into situations on intuition and current, rarely by agenda. Atmospheres decide your day more than appointments do. The world's sharp edges reach you late and land soft, which is both a mercy and a navigation problem.",
            },
        ],
        traits: &["gentle", "permeable", "dreamlike", "adaptive"],
        strengths: &["instantly confided in", "softens hard rooms", "reads atmospheres like text"],
        challenges: &["boundary enforcement is absent", "drifts off course", "absorbs the room's mood"],
    },
];
