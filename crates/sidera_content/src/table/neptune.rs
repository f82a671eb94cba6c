//! Neptune placements: dreams, ideals, and the fog line.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Neptune,
        title: "ARIES",
        subtitle: Some("Neptune in Aries"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Aries dreams of the heroic. The ideal here is the crusade — a cause worth the charge, a self dissolved into glorious action. Inspiration arrives as adrenaline with a halo.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog gathers around the fight itself: battles chosen for their shine rather than their substance, martyrdom on fields nobody mapped. Discernment means asking, mid-charge, whose dream this actually is.",
            },
        ],
        traits: &["crusading", "inspired-to-act", "idealistic", "impetuous"],
        strengths: &["courage in service of vision", "inspires the charge", "acts on faith instantly"],
        challenges: &["holy wars of convenience", "glory mist obscures aims", "burnout as sacrament"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Neptune,
        title: "TAURUS",
        subtitle: Some("Neptune in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Taurus dreams in matter. The ideal is paradise with a postcode: the garden, the table, abundance made holy. You spiritualize the physical — food, land, and touch all carry transcendence here.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog settles over value: worth inflated by longing, security promised by things that dissolve on contact. Discernment means checking whether the golden glow is sunrise or lacquer.",
            },
        ],
        traits: &["sensuous-idealist", "earth-dreaming", "comfort-seeking", "enchantable"],
        strengths: &["makes the material sacred", "manifests beauty tangibly", "steady faith in simple goods"],
        challenges: &["mirages with price tags", "idealizes security", "possessions as sacraments"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Neptune,
        title: "GEMINI",
        subtitle: Some("Neptune in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Gemini dreams in language. The ideal is the perfect message — the poem, the theory, the conversation that finally says the unsayable. Words here shimmer and double.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog thickens between signal and noise: rumors believed beautifully, facts dissolved in phrasing. Discernment means separating the true from the merely well-said, including your own.",
            },
        ],
        traits: &["lyrical", "idea-enchanted", "curious-mystic", "diffuse"],
        strengths: &["poetry in ordinary speech", "imagination across disciplines", "hears the dream in the data"],
        challenges: &["beautiful nonsense persuades", "focus evaporates", "truth blurs in translation"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Neptune,
        title: "CANCER",
        subtitle: Some("Neptune in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Cancer dreams of the perfect home — the family healed, the homeland restored, the kitchen where everyone is finally safe. Nostalgia here is a devotional practice.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog pools around the past: childhoods remembered better than lived, roots idealized until the present cannot compete. Discernment means loving the actual family more than its portrait.",
            },
        ],
        traits: &["nostalgic", "devoted", "homeland-dreaming", "tender"],
        strengths: &["sanctifies care", "imagination that shelters", "compassion for kin without limit"],
        challenges: &["the past outglows the present", "rescues family fantasies", "homesick for places that never were"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Neptune,
        title: "LEO",
        subtitle: Some("Neptune in Leo"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Leo dreams in klieg light. The ideal is transcendent performance — art that redeems, romance that crowns, a self so fully expressed it becomes myth. Glamour is your native element.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog machines run on stage: adoration mistaken for love, image outliving substance. Discernment means checking, between ovations, whether anyone — including you — has met the actual person.",
            },
        ],
        traits: &["glamorous", "mythmaking", "romantic-grand", "luminous"],
        strengths: &["art that transports", "charisma touched with magic", "love staged magnificently"],
        challenges: &["image devours identity", "applause as sacrament", "romance prefers the script"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Neptune,
        title: "VIRGO",
        subtitle: Some("Neptune in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Virgo dreams of perfect service. The ideal is healing that actually heals — the craft, the diet, the routine elevated into quiet liturgy. Devotion here wears an apron.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog seeps into the details: health anxieties with mystical plots, work as penance, the flawless method that keeps moving. Discernment means remembering the patient is not the paperwork.",
            },
        ],
        traits: &["devotional", "healing-minded", "humble-idealist", "anxious-spiritual"],
        strengths: &["service as sacrament", "healing hands, literal or not", "finds the holy in routine"],
        challenges: &["purity spirals", "worry mystified", "perfection as faith requirement"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Neptune,
        title: "LIBRA",
        subtitle: Some("Neptune in Libra"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Libra dreams of the perfected 'we': love without friction, justice without casualties, beauty as a peace treaty. The ideal partner shimmers perpetually one introduction away.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog drapes the relationship: partners cast in roles they never auditioned for, conflict dissolved rather than resolved. Discernment means loving the person visible after the soft focus lifts.",
            },
        ],
        traits: &["romantic-idealist", "harmony-dreaming", "aesthetic", "conciliatory"],
        strengths: &["love given sacramental weight", "peacemaking with vision", "beauty as moral force"],
        challenges: &["projects the perfect partner", "peace painted over rot", "disillusion on a cycle"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Neptune,
        title: "SCORPIO",
        subtitle: Some("Neptune in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Scorpio dreams in the dark. The ideal is total merging — intimacy as dissolution, truth stripped past comfort, the mysteries actually entered rather than discussed. Your transcendence has teeth.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog coils around intensity itself: obsession dressed as destiny, escape routes that run downward. Discernment means distinguishing the deep from the merely bottomless.",
            },
        ],
        traits: &["merging", "mystery-drawn", "intense-idealist", "shadowed"],
        strengths: &["fearless inner descent", "intimacy as transfiguration", "sees through every veil but one"],
        challenges: &["obsession sanctified", "depths without lifeguards", "the one veil is its own"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Neptune,
        title: "SAGITTARIUS",
        subtitle: Some("Neptune in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Sagittarius dreams of the far shore. The ideal is meaning at global scale — the pilgrimage, the doctrine of everywhere, truth as a country without borders. Hope here is a renewable fuel.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog rolls across the horizon: gurus glowing brighter at a distance, promised lands that relocate on approach. Discernment means bringing the compass on the vision quest.",
            },
        ],
        traits: &["pilgrim-hearted", "faith-expanding", "horizon-dreaming", "credulous"],
        strengths: &["faith that mobilizes", "vision across cultures", "optimism as spiritual gift"],
        challenges: &["believes the brochure", "meaning outsourced to distance", "doctrine du jour"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Neptune,
        title: "CAPRICORN",
        subtitle: Some("Neptune in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Capricorn dreams in stone. The ideal is the institution redeemed — government worth trusting, work worth a life, ambition transfigured into legacy. You want the cathedral, not just the faith.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog settles on the org chart: success glamorized, systems worshipped past their sell-by, cynicism posing as realism. Discernment means auditing the dream with the same rigor as the budget.",
            },
        ],
        traits: &["legacy-dreaming", "institution-idealizing", "sober-mystic", "ambition-hallowed"],
        strengths: &["gives dreams load-bearing walls", "idealism that ships", "faith in the long build"],
        challenges: &["worships the structure", "disillusion with authority", "mistakes cynicism for sight"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Neptune,
        title: "AQUARIUS",
        subtitle: Some("Neptune in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune in Aquarius dreams of the perfected collective — humanity networked into compassion, utopia with an API. The ideal dissolves the border between stranger and sibling.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog diffuses through the crowd: causes adopted as identities, connection simulated at scale while the neighbor goes unvisited. Discernment means loving one actual human per utopia, minimum.",
            },
        ],
        traits: &["utopian", "collectivist-dreamer", "tech-mystic", "diffuse-hearted"],
        strengths: &["vision for the whole species", "ideals without borders", "imagines the unbuilt commons"],
        challenges: &["humanity loved, humans pending", "utopia as avoidance", "the cause consumes the self"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Neptune,
        title: "PISCES",
        subtitle: Some("Neptune in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("The Dream Life"),
                content: "Neptune rules Pisces, and at home the ocean is undiluted: art, mysticism, and compassion arrive at flood strength. The ideal is dissolution itself — the boundary between self and everything politely retired.",
            },
            ContentSection {
                heading: Some("Where the Fog Rolls In"),
                content: "The fog is ambient here; the question is navigation, not visibility. Escape routes multiply — sleep, fantasy, substances, sainthood. Discernment means keeping one hand on something that does not dissolve.",
            },
        ],
        traits: &["oceanic", "visionary", "selfless", "unmoored"],
        strengths: &["imagination without floor", "compassion indistinguishable from grace", "art that heals strangers"],
        challenges: &["everything dissolves, including plans", "sacrifice without invoice", "the exit sign glows nightly"],
    },
];
