//! Compatibility entries for a Pisces user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Aries,
        heading: "The Dream and the Alarm Clock",
        description: "Aries wakes you from reveries with the subtlety of a fire drill, then wonders why you look wounded. Their courage can carry your visions into daylight if you let them champion you. You soften them in return — slowly, the way water smooths stone.",
        score: 5,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Taurus,
        heading: "Dreams With a Deed",
        description: "Taurus gives your floating world a dock, a kitchen, and a predictable dinner hour, and asks only that you show up to it. Their solidity is the safety your imagination always lacked. You bring the magic; they keep it watered. Quietly one of the kindest matches going.",
        score: 8,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Gemini,
        heading: "Fog Meets Wind",
        description: "Gemini talks in brilliant zigzags while you feel in slow spirals, and the two geometries rarely overlap where it counts. Their irony can nick your unguarded heart without malice. Mutable both, you bend endlessly around each other — sometimes into knots.",
        score: 5,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Cancer,
        heading: "Homecoming Waters",
        description: "Cancer reads your silences fluently and answers them with soup, blankets, and fierce protection. Their care gives your drifting a harbor that never closes. Emotional fluency this mutual is rare; guard it from the practical chores that neither of you naturally hears calling.",
        score: 9,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Leo,
        heading: "Stardust and Stagelight",
        description: "Leo performs and you believe — genuinely, which is the applause they secretly crave most. In return they defend your dreams like crown property. Their brightness can bleach your subtler shades if you never speak up; whisper your needs and the lion will quiet the whole room to hear them.",
        score: 6,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Virgo,
        heading: "The Poem and the Proofread",
        description: "Virgo is your opposite sign, alphabetizing the chaos you generate by existing. Their corrections are covert love letters, though the encoding takes years to crack. You teach them that not everything broken needs fixing; they teach you that some things do.",
        score: 7,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Libra,
        heading: "Two Romantics, One Reality",
        description: "Libra shares your devotion to beauty and your allergy to ugly conversations, so the difficult topics queue politely in the hall, sometimes forever. The affection is genuinely sweet. Appoint a day each month for unpleasant truths and the rest can stay velvet.",
        score: 6,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Scorpio,
        heading: "Beneath the Same Surface",
        description: "Scorpio's intensity, which sends other signs to safer shores, feels to you like finally being read in the original language. You surrender trust easily and, for once, to someone who treats it as sacred cargo. Deep calls to deep here, and both answer.",
        score: 9,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Sagittarius,
        heading: "Pilgrims on Different Roads",
        description: "Sagittarius quests outward for the meaning you dive inward to find — old Jupiter children, both of you, homesick for something unnamed. Their bluntness bruises; their honesty, oddly, heals. Wander together sometimes and apart often, and it holds.",
        score: 6,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Capricorn,
        heading: "The Lighthouse Keeper",
        description: "Capricorn stands unmoved in storms that scatter you, and you stop mistaking that stillness for indifference around the second winter. They carry your practical burdens without being asked; you remind them the climb was supposed to mean something. Sturdy magic.",
        score: 7,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Aquarius,
        heading: "The Mystic and the Architect",
        description: "Aquarius designs the better world you can already feel in your bones, but their love arrives as concept where you need it as current. Their detachment is not rejection, though it takes practice to believe that at 2 a.m. Shared ideals bridge most of the distance; the rest stays open water.",
        score: 6,
    },
    CompatRow {
        user: Sign::Pisces,
        other: Sign::Pisces,
        heading: "An Ocean With No Shore",
        description: "Another Pisces dissolves every boundary you were halfheartedly maintaining, and the merged dreamscape is gorgeous beyond description. Unfortunately neither of you brought a calendar, a budget, or an anchor. Moor the boat to something — anything — and drift on purpose instead of by default.",
        score: 8,
    },
];
