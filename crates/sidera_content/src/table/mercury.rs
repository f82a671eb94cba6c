//! Mercury placements: mind, voice, and information style.

use sidera_signs::{Placement, Sign};

use crate::record::{ContentEntry, ContentSection};

pub(super) static ENTRIES: [ContentEntry; 12] = [
    ContentEntry {
        sign: Sign::Aries,
        placement: Placement::Mercury,
        title: "ARIES",
        subtitle: Some("Mercury in Aries"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Aries thinks in openings. Ideas arrive as verdicts, sentences as volleys; you speak in first drafts and stand by them. Your mind is fastest under fire and slowest in committee.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You interrupt as a form of enthusiasm and decide as a form of listening. Debates are sport, hedging is noise, and the meeting after the meeting is your personal purgatory. People know exactly where you stand, sometimes from the next room.",
            },
        ],
        traits: &["decisive", "blunt", "rapid", "competitive"],
        strengths: &["cuts to the point instantly", "fearless questions", "thinks fastest in crisis"],
        challenges: &["speaks before weighing", "impatient with process", "argument as recreation"],
    },
    ContentEntry {
        sign: Sign::Taurus,
        placement: Placement::Mercury,
        title: "TAURUS",
        subtitle: Some("Mercury in Taurus"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Taurus thinks in masonry: slowly, in order, each conclusion load-tested before the next course is laid. You distrust cleverness that has not done manual labor. Once you know a thing, you know it permanently.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You speak when the sentence is finished being built, in a voice people find inexplicably calming. Rushed decisions get slower the harder they are pushed. Your word, once given, is structural.",
            },
        ],
        traits: &["deliberate", "practical", "retentive", "measured"],
        strengths: &["conclusions that hold weight", "immune to hype", "remembers everything useful"],
        challenges: &["slow to update", "digs in under pressure", "mistakes pace for depth"],
    },
    ContentEntry {
        sign: Sign::Gemini,
        placement: Placement::Mercury,
        title: "GEMINI",
        subtitle: Some("Mercury in Gemini"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury rules Gemini, and here the mind runs at native clock speed: parallel threads, instant cross-references, wit with no perceptible latency. You learn by talking, teach by accident, and footnote your own footnotes.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You are the conversation's switchboard, routing topics nobody knew were connected. Silence is a formatting error. The risk is breadth masquerading as depth — you can discuss anything for ten minutes and almost nothing for two hours.",
            },
        ],
        traits: &["agile", "witty", "omnivorous", "restless"],
        strengths: &["connects anything to anything", "verbal reflexes", "learns at conversation speed"],
        challenges: &["depth requires restraint", "tangent gravity", "retention trails curiosity"],
    },
    ContentEntry {
        sign: Sign::Cancer,
        placement: Placement::Mercury,
        title: "CANCER",
        subtitle: Some("Mercury in Cancer"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Cancer thinks in tides and memories. Information arrives with emotional metadata attached, and you retrieve facts by how they felt. Your reasoning is associative, roundabout, and eerily accurate about people.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You listen like a harbor and speak in careful, warming circles. Tone registers before content; a harsh delivery can sink a sound argument for you. You never forget what was said in anger, including by yourself.",
            },
        ],
        traits: &["intuitive", "retentive", "indirect", "empathic"],
        strengths: &["reads subtext fluently", "memory with feeling attached", "words that soothe"],
        challenges: &["takes critique personally", "approaches points sideways", "mood colors logic"],
    },
    ContentEntry {
        sign: Sign::Leo,
        placement: Placement::Mercury,
        title: "LEO",
        subtitle: Some("Mercury in Leo"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Leo thinks in narrative and speaks in keynote. Ideas are organized around a throughline, delivered with warmth and a light percussion of self-reference. You do not share information; you present it.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You hold rooms easily and edit reality toward the better story, mostly harmlessly. Feedback lands best as tribute with footnotes. When you champion an idea, it stays championed — your convictions have a loyalty program.",
            },
        ],
        traits: &["expressive", "confident", "narrative", "fixed-of-mind"],
        strengths: &["makes ideas unforgettable", "natural spokesperson", "convinces by warmth"],
        challenges: &["drama inflates the data", "correction bruises", "listens for applause lines"],
    },
    ContentEntry {
        sign: Sign::Virgo,
        placement: Placement::Mercury,
        title: "VIRGO",
        subtitle: Some("Mercury in Virgo"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Virgo is Mercury at the workbench: dignified, exact, and permanently mid-audit. You think in checklists, speak in qualifications, and can locate the flaw in anything, including this sentence. Precision is your love language and your tic.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You answer the question asked, a rarer service than it sounds. Exaggeration physically bothers you. The gift is analysis that actually fixes things; the tax is a red pen that never fully caps.",
            },
        ],
        traits: &["exacting", "analytical", "useful", "understated"],
        strengths: &["finds the actual problem", "says precisely what it means", "edits chaos into order"],
        challenges: &["perfectionism stalls shipping", "critique outruns praise", "misses forests, catalogs trees"],
    },
    ContentEntry {
        sign: Sign::Libra,
        placement: Placement::Mercury,
        title: "LIBRA",
        subtitle: Some("Mercury in Libra"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Libra thinks in counterweights. Every thesis summons its antithesis for a fair hearing, which makes you a superb judge and a slow lunch orderer. Language arrives pre-polished; you are incapable of an ugly sentence.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You argue both sides better than their owners and soften every verdict for transport. Agreement feels like success even when it is only adjournment. Your 'it depends' is usually correct and occasionally a hiding place.",
            },
        ],
        traits: &["balanced", "diplomatic", "elegant", "deliberative"],
        strengths: &["fairness in real time", "persuades without bruising", "hears every side honestly"],
        challenges: &["verdicts postponed indefinitely", "polish over position", "agrees its way out of rooms"],
    },
    ContentEntry {
        sign: Sign::Scorpio,
        placement: Placement::Mercury,
        title: "SCORPIO",
        subtitle: Some("Mercury in Scorpio"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Scorpio thinks forensically. Surface statements are evidence, not information; you read for motive, omission, and the sentence someone decided not to say. Your questions arrive pre-sharpened.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You speak little, land heavily, and remember verbatim. Small talk is cover traffic while you complete the actual assessment. People feel deeply understood or lightly x-rayed, depending on their conscience.",
            },
        ],
        traits: &["penetrating", "strategic", "reserved", "precise"],
        strengths: &["detects the unsaid", "research-grade focus", "words chosen like lockpicks"],
        challenges: &["suspicion as method", "withholds to stay armored", "conversation becomes interrogation"],
    },
    ContentEntry {
        sign: Sign::Sagittarius,
        placement: Placement::Mercury,
        title: "SAGITTARIUS",
        subtitle: Some("Mercury in Sagittarius"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Sagittarius thinks in panoramas. Details are scenery; the destination is the thesis, preferably a large one about life itself. You reason by analogy, teach by parable, and round everything up.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You are funny, frank, and quotable, with a blooper reel of truths told at the wrong volume. Precision bores you; meaning does not. Every exchange is a chance to enlarge the map, yours or theirs.",
            },
        ],
        traits: &["expansive", "candid", "humorous", "approximate"],
        strengths: &["big-picture synthesis", "honesty that clears air", "makes learning an adventure"],
        challenges: &["rounds off the facts", "promises exceed bandwidth", "tact optional at launch"],
    },
    ContentEntry {
        sign: Sign::Capricorn,
        placement: Placement::Mercury,
        title: "CAPRICORN",
        subtitle: Some("Mercury in Capricorn"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Capricorn thinks in deliverables. Ideas are vetted for cost, precedent, and load rating before release; speculation is a luxury budgeted sparingly. Your mind climbs — methodically, with anchors placed.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You speak economically and mean each unit. Meetings end earlier when you run them. The dry wit surfaces on a delay, like good whisky, and people learn to wait for it.",
            },
        ],
        traits: &["structured", "economical", "skeptical", "dry"],
        strengths: &["plans that survive contact", "says it once, correctly", "judgment people bank on"],
        challenges: &["dismisses the unproven", "pessimism as rigor", "warmth rationed in speech"],
    },
    ContentEntry {
        sign: Sign::Aquarius,
        placement: Placement::Mercury,
        title: "AQUARIUS",
        subtitle: Some("Mercury in Aquarius"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Aquarius thinks in systems and exceptions to them. You reason from first principles, distrust 'everyone knows,' and keep a private collection of heresies in mint condition. The future is your home timezone.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You debate ideas without bruising people, then surprise everyone by refusing to budge an inch on principle. Jargon from six fields cross-pollinates in your sentences. Consensus is interesting to you chiefly as a failure mode.",
            },
        ],
        traits: &["inventive", "contrarian", "systematic", "cool-headed"],
        strengths: &["genuinely original angles", "logic unswayed by crowds", "connects distant disciplines"],
        challenges: &["contrary past usefulness", "abstraction outruns audience", "fixed ideas in radical packaging"],
    },
    ContentEntry {
        sign: Sign::Pisces,
        placement: Placement::Mercury,
        title: "PISCES",
        subtitle: Some("Mercury in Pisces"),
        sections: &[
            ContentSection {
                heading: Some("Mind and Voice"),
                content: "Mercury in Pisces thinks in watercolor. Ideas bleed into each other, logic travels by image and intuition, and the right answer often arrives without its derivation. You know things before you can source them.",
            },
            ContentSection {
                heading: Some("In Conversation"),
                content: "You listen beneath the words and reply to what was meant, which unnerves exactly the people it should. Linear arguments lose you; metaphors find you. Deadlines and details swim past unless netted in writing.",
            },
        ],
        traits: &["intuitive", "imagistic", "gentle", "diffuse"],
        strengths: &["hears what wasn't said", "poetic persuasion", "creative leaps past logic"],
        challenges: &["facts drift", "vagueness under pressure", "loses arguments it was right about"],
    },
];
