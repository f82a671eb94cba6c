//! Chiron placements: the wound and the medicine.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Chiron,
        title: "ARIES",
        subtitle: Some("Chiron in Aries"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Aries aches at the root of 'I am.' The wound is to the right to exist loudly — somewhere early, asserting yourself cost too much, and the instinct to charge got tangled with the expectation of being shot down.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is modeled courage: every time you act despite the flinch, someone watching borrows the permission. You become the mentor who teaches others to take up space, precisely because you had to learn it in public.",
            },
        ],
        traits: &["identity-wounded", "brave-despite", "self-doubting-warrior", "healing-by-daring"],
        strengths: &["courage that understands fear", "champions the unheard self", "initiative reclaimed and shared"],
        challenges: &["existence feels contested", "assertion triggers old pain", "overcompensating bravado"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Chiron,
        title: "TAURUS",
        subtitle: Some("Chiron in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Taurus aches around 'enough.' The wound is to security and worth — resources that vanished, bodies that felt wrong, a scarcity that moved into the nervous system and pays no rent.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is embodied sufficiency: learning, slowly, that safety is a felt sense you can rebuild. You become the one who teaches others to inhabit their bodies and their budgets without flinching.",
            },
        ],
        traits: &["scarcity-scarred", "steadiness-seeking", "body-tender", "value-questioning"],
        strengths: &["teaches true security", "grounded compassion", "worth rebuilt from bedrock"],
        challenges: &["never-enough static", "body as battleground", "hoarding against old ghosts"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Chiron,
        title: "GEMINI",
        subtitle: Some("Chiron in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Gemini aches in the throat. The wound is to the voice — mocked questions, dismissed intelligence, words that came out wrong at the worst moment and never forgot it. You doubt the very instrument you most need.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is speech reclaimed: every articulate sentence is a small repair. You become the translator for the tongue-tied, gifted at giving language to people stuck where you once were.",
            },
        ],
        traits: &["voice-wounded", "word-careful", "listener-made", "bridge-building"],
        strengths: &["gives words to the wordless", "listens like a healer", "hard-won eloquence"],
        challenges: &["speaks past self-doubt", "smart but never sure of it", "silence as old shelter"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Chiron,
        title: "CANCER",
        subtitle: Some("Chiron in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Cancer aches at the hearth. The wound is to belonging — the home that wasn't safe, the care that didn't come, the sense of being the one person the nest forgot. You mother everyone and suspect no one will mother you.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is re-parenting, inward first. You become a genius of sanctuary for others, and the healing completes only when your own name appears on the guest list.",
            },
        ],
        traits: &["belonging-wounded", "caretaking", "home-hungry", "deep-nurturing"],
        strengths: &["sanctuary-builder for strays", "empathy from lived absence", "family redefined and healed"],
        challenges: &["cares to avoid needing", "home never feels earned", "the empty chair at its own table"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Chiron,
        title: "LEO",
        subtitle: Some("Chiron in Leo"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Leo aches in the spotlight. The wound is to shine — creativity ridiculed, specialness denied, applause that went to someone else on a loop. You crave the stage and brace for the rotten fruit.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is unconditional creative worth: making things because you are alive, not because the room votes. You become the one who spots unlit talent and hands out spotlights you never got.",
            },
        ],
        traits: &["shine-wounded", "creative-tender", "applause-wary", "generous-hearted"],
        strengths: &["celebrates others into bloom", "art with a healed ache in it", "dignity beyond applause"],
        challenges: &["visibility feels dangerous", "praise slides off", "performs worth instead of feeling it"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Chiron,
        title: "VIRGO",
        subtitle: Some("Chiron in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Virgo aches in the flaw. The wound is to adequacy — the error that defined you, the standard that kept rising, the suspicion that you are a defect wearing a person. Helpfulness became armor early.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is wholeness without perfection: service from sufficiency rather than penance. You become the healer who tells others, credibly, that broken and worthy are not antonyms.",
            },
        ],
        traits: &["adequacy-wounded", "service-armored", "detail-tender", "quietly healing"],
        strengths: &["heals what it once judged", "competence with compassion", "teaches enoughness by example"],
        challenges: &["the flaw loop replays", "helps to earn existence", "perfection as apology"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Chiron,
        title: "LIBRA",
        subtitle: Some("Chiron in Libra"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Libra aches in the 'we.' The wound is relational — abandonment, unfairness, or a partnership that taught you love is a contest you arrive pre-disqualified from. Alone feels like exposure; together feels like risk.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is relationship as practice, not performance: rupture survived, repair modeled. You become the counselor-friend whose own scars make your fairness trustworthy.",
            },
        ],
        traits: &["partnership-wounded", "fairness-sensitive", "bridge-tending", "diplomatic-tender"],
        strengths: &["heals other people's bonds", "justice felt in the body", "love rebuilt skill by skill"],
        challenges: &["abandonment math runs nightly", "over-gives to stay chosen", "conflict means catastrophe"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Chiron,
        title: "SCORPIO",
        subtitle: Some("Chiron in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Scorpio aches in the trust. The wound is betrayal-shaped — intimacy that became leverage, power that became violation, losses that arrived without ceremony. The vault built itself.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is witnessed depth: letting one safe person see the basement and neither of you dying of it. You become the guide for other people's underworlds, unshockable and unfooled.",
            },
        ],
        traits: &["trust-wounded", "depth-keeping", "crisis-wise", "phoenix-patterned"],
        strengths: &["accompanies the unaccompaniable", "intimacy earned is absolute", "transmutes betrayal into wisdom"],
        challenges: &["tests until it breaks things", "vulnerability feels fatal", "keeps dying rehearsed"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Chiron,
        title: "SAGITTARIUS",
        subtitle: Some("Chiron in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Sagittarius aches in the meaning. The wound is to faith — the belief that failed, the teacher that fell, the question 'why' that got laughed out of the room. Hope feels naive and its absence feels fatal.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is meaning hand-built: a faith assembled from tested parts, owned outright. You become the teacher who says 'I don't know' out loud, and is believed because of it.",
            },
        ],
        traits: &["faith-wounded", "meaning-hungry", "seeker-scarred", "wisdom-building"],
        strengths: &["belief that survived the fire", "guides other doubters honestly", "hope with receipts"],
        challenges: &["cynicism as scar tissue", "seeks in perpetuity", "distrusts its own optimism"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Chiron,
        title: "CAPRICORN",
        subtitle: Some("Chiron in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Capricorn aches in the achievement. The wound is to recognition — effort that was never enough, authority that crushed instead of raised, worth indexed to output at an age when output meant obedience.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is intrinsic standing: existing without a performance review. You become the rare authority who hands status downward, building the ladder you were denied and holding it steady.",
            },
        ],
        traits: &["worth-wounded", "over-responsible", "quietly striving", "authority-tender"],
        strengths: &["mentors without gatekeeping", "success decoupled from fear", "carries others' climbs"],
        challenges: &["rest feels like theft", "the summit never certifies", "father-shaped expectations"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Chiron,
        title: "AQUARIUS",
        subtitle: Some("Chiron in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Aquarius aches in the belonging-to-the-group. The wound is exile-shaped — the weird one, the one the circle closed against, different in a way that was named and punished. Detachment was the anesthetic.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is chosen community: discovering the tribe that needed exactly your frequency. You become the one who spots the outsider at every gathering and widens the circle on sight.",
            },
        ],
        traits: &["exile-wounded", "different-by-decree", "community-building", "cool-surfaced"],
        strengths: &["includes the excluded instinctively", "difference alchemized to gift", "builds homes for outliers"],
        challenges: &["belongs nowhere fully", "aloofness as armor", "the group is longed for and distrusted"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Chiron,
        title: "PISCES",
        subtitle: Some("Chiron in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("The Tender Spot"),
                content: "Chiron in Pisces aches in the soul itself. The wound is diffuse — a grief without address, compassion punished, the sense of being too permeable for the world as issued. Faith and disillusion arrived in the same shipment.",
            },
            ContentSection {
                heading: Some("The Medicine"),
                content: "The medicine is compassion with a container: feeling everything without drowning in anything. You become the healer of last resort, the one who sits with the unfixable and makes it bearable.",
            },
        ],
        traits: &["soul-wounded", "boundlessly tender", "grief-fluent", "quietly mystical"],
        strengths: &["sits with the unbearable", "compassion with no floor", "heals by presence alone"],
        challenges: &["pain without provenance", "porousness exhausts", "rescue as reflex"],
    },
];
