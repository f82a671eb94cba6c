//! Mars placements: drive, desire, and conflict style.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Mars,
        title: "ARIES",
        subtitle: Some("Mars in Aries"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars rules Aries, and here the engine runs unmuffled: want it, say it, start it, now. Your energy arrives in detonations rather than currents, magnificent for launches and useless for sieges. Desire and action share a single synapse.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight immediately, openly, and briefly, then genuinely forget the war. Opponents who go quiet and strategic unsettle you; you keep checking whether the fight is still on. It usually isn't — you already won or wandered off.",
            },
        ],
        traits: &["explosive", "fearless", "immediate", "uncomplicated"],
        strengths: &["first through every door", "anger without archive", "pure executive force"],
        challenges: &["stamina for marathons", "collateral bluntness", "boredom after the launch"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Mars,
        title: "TAURUS",
        subtitle: Some("Mars in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Taurus is torque, not horsepower. You start slowly, build momentum no one can arrest, and finish everything you genuinely begin. Desire is patient, physical, and owns a long memory.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You endure provocation far past other signs' limits, which observers mistake for immunity. It is accumulation. The eventual eruption is rare, total, and remembered regionally. Mostly you simply outlast the problem.",
            },
        ],
        traits: &["persistent", "slow-burning", "immovable", "sensual"],
        strengths: &["unstoppable once rolling", "finishes what it starts", "strength without display"],
        challenges: &["slow to start", "anger compounds quietly", "cannot be steered mid-course"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Mars,
        title: "GEMINI",
        subtitle: Some("Mars in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Gemini fights and wants with words. Energy scatters across projects like buckshot; you are brilliant in sprints, allergic to slogs, and most productive with three things due at once. Desire follows fascination.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "Your weapon is the faster sentence. You debate circles around opponents, switch positions to keep the bout interesting, and wound more with wit than you register. Physical confrontation strikes you as a failure of vocabulary.",
            },
        ],
        traits: &["quick", "verbal", "scattered", "nimble"],
        strengths: &["wins the argument in real time", "adapts mid-fight", "energy multiplies with variety"],
        challenges: &["focus fragments", "wit cuts deeper than meant", "finishes few of many starts"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Mars,
        title: "CANCER",
        subtitle: Some("Mars in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Cancer drives sideways, like its crab. Ambition is real but tethered to feeling: you work hardest for people and causes you would personally shelter. Motivation surges with emotional weather and ebbs with it too.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You defend rather than attack, and you defend ferociously — threaten your people and the claws are instant. Direct confrontation on your own behalf is harder; grievances go inward, then emerge at odd angles weeks later.",
            },
        ],
        traits: &["protective", "indirect", "tenacious", "tidal"],
        strengths: &["unbeatable defending its own", "endurance through feeling", "strength that shelters"],
        challenges: &["anger goes sideways", "motivation tracks mood", "fights for everyone but itself"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Mars,
        title: "LEO",
        subtitle: Some("Mars in Leo"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Leo performs its ambition. You work magnificently when witnessed, and the pursuit of excellence doubles as the pursuit of applause, honestly earned. Creative fire here is steady, not flickering — a fixed flame with a fan club.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight with dignity, in daylight, and take the low blow personally forever. Respect is the treaty term that matters; win or lose, you require the bout to have been worthy of you. Grudges are beneath you, officially.",
            },
        ],
        traits: &["proud", "sustained", "theatrical", "honorable"],
        strengths: &["charisma as fuel", "fights clean and committed", "stamina for grand projects"],
        challenges: &["needs an audience to push", "pride extends the war", "drama taxes the effort"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Mars,
        title: "VIRGO",
        subtitle: Some("Mars in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Virgo is energy under quality control. You attack problems through process: decompose, prioritize, execute, verify. The work is tireless and nearly invisible, which is how you prefer it and why you are underestimated.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight with evidence and improved documentation. Criticism is your sidearm, precise and occasionally over-drawn. Open shouting strikes you as data loss; you prefer the quiet memo that ends the matter.",
            },
        ],
        traits: &["methodical", "tireless", "precise", "contained"],
        strengths: &["execution without drama", "improves while others argue", "wins on the details"],
        challenges: &["perfection slows the strike", "nitpicks as combat", "overwork as default setting"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Mars,
        title: "LIBRA",
        subtitle: Some("Mars in Libra"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Libra drives by consensus, which is a contradiction it lives gracefully. You act decisively on behalf of fairness and haltingly on behalf of yourself. Partnership is your performance enhancer; injustice, your smelling salts.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight like a barrister: composed, procedural, devastating on the merits. Open rage embarrasses you even secondhand. The danger is litigation instead of resolution — winning the point, adjourning the feeling.",
            },
        ],
        traits: &["measured", "fair-minded", "relational", "hesitant"],
        strengths: &["fights beautifully for others", "keeps conflicts civilized", "strategy over spleen"],
        challenges: &["own interests underserved", "anger files paperwork", "decision lag at the trigger"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Mars,
        title: "SCORPIO",
        subtitle: Some("Mars in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Scorpio is a pressure system. Drive here is total, patient, and subterranean — you want few things, entirely, for years if necessary. Obstacles are not fought so much as studied until they surrender structurally.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You do not raise your voice; you lower the temperature. Strategy, timing, and an unnerving memory do the work of shouting. Opponents rarely see the decisive move, before or after it lands.",
            },
        ],
        traits: &["relentless", "strategic", "controlled", "deep-running"],
        strengths: &["willpower without expiry", "wins the long game", "composure under any fire"],
        challenges: &["escalation runs silent and total", "forgets nothing, forgives later", "intensity exhausts allies"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Mars,
        title: "SAGITTARIUS",
        subtitle: Some("Mars in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Sagittarius gallops. Energy needs open country — big goals, long odds, new maps — and dies in cubicles. You launch crusades with glorious conviction and delegate the paperwork to fate.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight with honesty at cannon volume, laugh mid-argument, and genuinely expect the feud to dissolve by dinner. Moralizing is your one dirty weapon. Cornered, you do not double down; you leave.",
            },
        ],
        traits: &["expansive", "blunt", "optimistic", "roving"],
        strengths: &["crusade-grade conviction", "conflict without poison", "aims at horizons, not targets"],
        challenges: &["follow-through drifts", "truth fired without sights", "fences provoke bolting"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Mars,
        title: "CAPRICORN",
        subtitle: Some("Mars in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars is exalted in Capricorn: ambition with engineering. Energy is budgeted, compounded, and aimed at positions rather than moments. You outwork everyone without visible strain and collect achievements like retained earnings.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight cold, by the org chart and the long memory. Escalation is a tool, never a temperature. Adversaries discover, years later, the quiet ways the field was tilted. It rarely felt like a fight; it was one.",
            },
        ],
        traits: &["disciplined", "strategic", "unrelenting", "composed"],
        strengths: &["endurance with a plan", "power accrued silently", "never fights downhill"],
        challenges: &["work as only weapon", "coldness wounds allies", "ambition eats sabbath"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Mars,
        title: "AQUARIUS",
        subtitle: Some("Mars in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Aquarius fights for the group and balks at the uniform. Energy flows to causes, systems, and the overthrow of lazy defaults; personal ambition feels gauche unless dressed as progress. You innovate or you idle.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You fight with principle and documentation, coolly, often for people you have never met. Direct anger is converted to ironic distance, which infuriates opponents more efficiently anyway. On a matter of principle you do not retreat; you incorporate.",
            },
        ],
        traits: &["principled", "detached", "inventive", "stubborn"],
        strengths: &["fights the system, not the waiter", "cool head in hot rooms", "original lines of attack"],
        challenges: &["personal stakes disowned", "contrarian fuel burns dirty", "detachment reads as disdain"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Mars,
        title: "PISCES",
        subtitle: Some("Mars in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("Drive and Desire"),
                content: "Mars in Pisces drives like weather: in fronts, moods, and sudden clearings. Motivation answers to inspiration, not schedules — on the right current you produce wonders, against it you produce excuses of genuine artistic merit.",
            },
            ContentSection {
                heading: Some("In Conflict"),
                content: "You evade, absorb, and outflow rather than clash; opponents punch fog and grow tired. Anger turns inward first, then leaks as sadness or vanishes into creative work. Fighting for the defenseless is the exception — there, you find sudden steel.",
            },
        ],
        traits: &["fluid", "inspired", "evasive", "compassionate"],
        strengths: &["wins by yielding", "fights hardest for the helpless", "creative force when moved"],
        challenges: &["discipline dissolves", "anger goes subterranean", "drifts from unfinished battles"],
    },
];
