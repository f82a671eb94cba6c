//! Compatibility entries for a Leo user.

use sidera_signs::Sign;

use super::CompatRow;

pub(super) static ROWS: [CompatRow; 12] = [
    CompatRow {
        user: Sign::Leo,
        other: Sign::Aries,
        heading: "Bonfire Diplomacy",
        description: "Aries brings the charge and you bring the occasion — together every plan becomes an event with a guest list. They never begrudge your shine because they are too busy moving to compete for it, mostly. Two fires need only one rule: celebrate each other's victories as loudly as your own.",
        score: 9,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Taurus,
        heading: "Velvet and Gold",
        description: "Taurus appreciates quality and you are, frankly, quality — but they will still question the receipts. Their devotion is steady in a way your dramatic heart finds both dull and deeply reassuring. Two fixed signs means the standoffs are legendary; the making-up, fortunately, is too.",
        score: 6,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Gemini,
        heading: "The Headliner and the Hype",
        description: "Gemini's wit gives your charisma a script worth performing, and their curiosity keeps finding new angles on you, which you adore. They are the rare partner who can tease you without drawing blood. Pin them down gently; chased too hard, the breeze simply changes direction.",
        score: 8,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Cancer,
        heading: "Sunlight on Still Water",
        description: "Cancer tends the private world where you can finally stop performing, and that refuge is worth more than any ovation. Their moods ask for a patience your pride must practice. Warm their shell instead of demanding they leave it, and you gain the most loyal heart in the zodiac.",
        score: 6,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Leo,
        heading: "A Court With Two Thrones",
        description: "Two Leos light up a room past fire code, and the mutual admiration — when flowing — is gorgeous to watch. The trouble arrives when both monarchs need the same throne on the same night. Alternate reigns, applaud fiercely, and this is pure pageantry in the best sense.",
        score: 7,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Virgo,
        heading: "The Performance and the Review",
        description: "Virgo's editing instinct meets your opening night, and not every note lands as love — though nearly all of them are meant that way. They keep your empire's books balanced while you keep their seriousness from calcifying. Thank the critic and the show improves; scorn them and it closes early.",
        score: 5,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Libra,
        heading: "Grace and Grandeur",
        description: "Libra frames your fire in impeccable taste and never competes for your spotlight — they built the lighting rig. Socially you are unstoppable; privately their indecision tests a patience you pretend to have. Decide together on the big things and let them curate everything else.",
        score: 8,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Scorpio,
        heading: "The Crown and the Crucible",
        description: "Scorpio is unimpressed by the performance and transfixed by whatever is underneath it, which is the most unnerving compliment you have ever received. Two fixed signs, both allergic to losing. The passion is volcanic, the power struggles equally so; surrender a little, strategically.",
        score: 6,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Sagittarius,
        heading: "Fire on the Horizon",
        description: "Sagittarius turns your life into an expedition and never once asks you to be smaller on the road. Their honesty is blunt but free of agenda, which your pride can actually digest. Between your warmth and their wanderlust, the bonfire travels — and everyone else follows it.",
        score: 9,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Capricorn,
        heading: "The Sun and the Summit",
        description: "Capricorn respects achievements over applause and quietly wonders what your applause is for. Their austerity can starve your warmth; your extravagance alarms their ledgers. Build something real together and the respect arrives — slowly, like everything Capricorn values.",
        score: 5,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Aquarius,
        heading: "Opposite Poles of the Party",
        description: "Aquarius is your opposite sign: you radiate from the center while they observe from the edge, equally magnetic in inverse ways. They puncture your theatrics with cool wit, and you thaw their distance with sheer warmth. Each of you secretly wants what the other was born holding.",
        score: 7,
    },
    CompatRow {
        user: Sign::Leo,
        other: Sign::Pisces,
        heading: "The Spotlight and the Mist",
        description: "Pisces dissolves when you need them solid and dreams when you need applause, yet their devotion is the least calculated you will ever receive. They see the tender person behind the mane and love that one specifically. Shield them from your volume and they will soften your whole kingdom.",
        score: 6,
    },
];
