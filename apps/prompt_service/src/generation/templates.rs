//! Hand-authored prompt templates, keyed by genre.
//!
//! Placeholders are bare identifiers in braces (`{character}`). Every
//! placeholder used in a body must have a non-empty candidate list; the tests
//! below check the whole library.

/// One fill-in-the-blanks prompt.
#[derive(Debug)]
pub struct CategoryTemplate {
    pub title: &'static str,
    pub body: &'static str,
    pub options: &'static [(&'static str, &'static [&'static str])],
}

impl CategoryTemplate {
    /// Candidate phrases for `placeholder`, if the template defines it.
    pub fn candidates(&self, placeholder: &str) -> Option<&'static [&'static str]> {
        self.options
            .iter()
            .find(|(name, _)| *name == placeholder)
            .map(|(_, candidates)| *candidates)
    }
}

/// Used when none of the selected categories has a template.
pub static DEFAULT_TEMPLATE: CategoryTemplate = CategoryTemplate {
    title: "The Unexpected Journey",
    body: "Your protagonist discovers {discovery} that changes everything they believed about {belief}. They must {action} before {deadline}.",
    options: &[
        ("discovery", &["a hidden letter", "a secret door", "an old photograph"]),
        ("belief", &["their family history", "their own identity", "the nature of reality"]),
        ("action", &["uncover the truth", "make an impossible choice", "confront their fears"]),
        ("deadline", &["it's too late", "someone else finds out", "the opportunity disappears"]),
    ],
};

static FANTASY: &[CategoryTemplate] = &[
    CategoryTemplate {
        title: "The Last Dragon's Secret",
        body: "In a world where dragons were thought extinct, {character} discovers {discovery} hidden in {location}. As {conflict} threatens the realm, they must {challenge} before {deadline}.",
        options: &[
            ("character", &["a young apprentice mage", "an exiled knight", "a street thief with unusual talents"]),
            ("discovery", &["a dragon egg", "an ancient prophecy", "a map to the dragon sanctuary"]),
            ("location", &["the royal library's forbidden section", "an abandoned tower", "beneath the city sewers"]),
            ("conflict", &["a dark sorcerer's army", "a plague of shadows", "civil war"]),
            ("challenge", &["master forbidden magic", "unite warring kingdoms", "awaken the sleeping dragon"]),
            ("deadline", &["the blood moon rises", "winter's first snow", "the king's coronation"]),
        ],
    },
    CategoryTemplate {
        title: "The Borrowed Spell",
        body: "{character} casts a spell borrowed from {source}, but the magic demands {price}. When {complication}, they must choose between {option_a} and {option_b}.",
        options: &[
            ("character", &["a hedge witch's reluctant heir", "a disgraced court wizard", "a farm girl who can hear the rain"]),
            ("source", &["a dead god's diary", "a rival's stolen grimoire", "the song of a drowned city"]),
            ("price", &["one memory each dawn", "the colour of their eyes", "a year of someone else's life"]),
            ("complication", &["the spell begins to spread to strangers", "the lender comes to collect", "the magic refuses to end"]),
            ("option_a", &["breaking the spell and losing everything it gave", "paying the price in full"]),
            ("option_b", &["letting the kingdom pay instead", "bargaining with the one who wrote it"]),
        ],
    },
];

static SCIENCE_FICTION: &[CategoryTemplate] = &[CategoryTemplate {
    title: "Colony Ship Paradox",
    body: "The generation ship {ship_name} has been traveling for {duration}, but {character} discovers {revelation}. With {resource} running low and {threat} approaching, they must decide whether to {choice}.",
    options: &[
        ("ship_name", &["Horizon's Hope", "New Eden", "Stellar Ark"]),
        ("duration", &["300 years", "50 generations", "longer than recorded history"]),
        ("character", &["the ship's AI maintenance tech", "a historian studying old Earth", "the youngest council member"]),
        ("revelation", &["they've been traveling in circles", "Earth still exists", "the ship is actually a prison"]),
        ("resource", &["oxygen", "genetic diversity", "hope"]),
        ("threat", &["an alien armada", "system-wide cascade failure", "a mutiny"]),
        ("choice", &["wake the frozen founders", "change course to an unknown planet", "reveal the truth to everyone"]),
    ],
}];

static MYSTERY: &[CategoryTemplate] = &[
    CategoryTemplate {
        title: "The Vanishing Gallery",
        body: "{character} arrives at {location} to investigate {mystery}. The only clue is {clue}, but {complication} makes everyone a suspect. The truth involves {twist}.",
        options: &[
            ("character", &["a retired detective", "an insurance investigator", "an art student"]),
            ("location", &["a private island museum", "an underground auction house", "a restored Victorian mansion"]),
            ("mystery", &["the disappearance of priceless paintings", "a murder during a locked-room auction", "forged masterpieces appearing worldwide"]),
            ("clue", &["a half-burned photograph", "a coded message in the victim's notebook", "paint that shouldn't exist yet"]),
            ("complication", &["everyone has an alibi", "the security footage has been edited", "the victim is still alive"]),
            ("twist", &["time travel", "identical twins nobody knew about", "the detective is the criminal"]),
        ],
    },
    CategoryTemplate {
        title: "The Last Train Out",
        body: "On {train}, {character} finds {clue} minutes before {event}. Every passenger has {secret}, and the conductor insists {claim}.",
        options: &[
            ("train", &["the overnight sleeper to Vienna", "a snowbound mountain railway", "the final run of a retired steam line"]),
            ("character", &["a crossword setter", "a night-shift nurse", "a pickpocket trying to go straight"]),
            ("clue", &["a ticket stamped for tomorrow", "a stopped pocket watch", "a glove that matches no one"]),
            ("event", &["the train enters a long tunnel", "the border inspection", "the lights fail"]),
            ("secret", &["a reason to lie about the time", "a connection to the missing heiress", "a second passport"]),
            ("claim", &["nobody boarded after midnight", "the dining car has been locked all night", "the victim was never on the manifest"]),
        ],
    },
];

static HORROR: &[CategoryTemplate] = &[CategoryTemplate {
    title: "The Inheritance",
    body: "{character} inherits {inheritance} from {relative}, but discovers {horror} lurking within. As {event} approaches, they realize {revelation} and must {action} to survive.",
    options: &[
        ("character", &["a struggling artist", "a medical student", "a single parent"]),
        ("inheritance", &["a Victorian mansion", "an antique shop", "a storage unit full of artifacts"]),
        ("relative", &["an uncle they never knew existed", "their recently deceased grandmother", "a distant cousin"]),
        ("horror", &["the previous owners never left", "a portal to somewhere else", "a curse that transfers to the new owner"]),
        ("event", &["the anniversary of a tragedy", "a lunar eclipse", "their first night alone"]),
        ("revelation", &["they were chosen for a reason", "their family has kept this secret for generations", "escaping makes it worse"]),
        ("action", &["perform an ancient ritual", "burn everything", "make a terrible sacrifice"]),
    ],
}];

static ROMANCE: &[CategoryTemplate] = &[CategoryTemplate {
    title: "Second Chances",
    body: "{character1} and {character2} meet again after {time_period} at {location}. Despite {obstacle}, they discover {connection}, but {conflict} threatens to {consequence}.",
    options: &[
        ("character1", &["a successful CEO", "a small-town teacher", "a traveling musician"]),
        ("character2", &["their college sweetheart", "their former rival", "their best friend's sibling"]),
        ("time_period", &["ten years", "a lifetime", "one unforgettable summer"]),
        ("location", &["a destination wedding", "their hometown reunion", "an unexpected flight delay"]),
        ("obstacle", &["they're both engaged to others", "a bitter misunderstanding", "completely different lives now"]),
        ("connection", &["they still finish each other's sentences", "a shared dream they never forgot", "letters never sent"]),
        ("conflict", &["a job opportunity abroad", "family disapproval", "a secret from the past"]),
        ("consequence", &["separate them forever", "change everything", "break other hearts"]),
    ],
}];

static LIBRARY: &[(&str, &[CategoryTemplate])] = &[
    ("Fantasy", FANTASY),
    ("Science Fiction", SCIENCE_FICTION),
    ("Mystery", MYSTERY),
    ("Horror", HORROR),
    ("Romance", ROMANCE),
];

/// Templates registered for `category`; empty for unknown categories.
pub fn templates_for(category: &str) -> &'static [CategoryTemplate] {
    LIBRARY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}

/// Category names that have at least one template.
pub fn template_categories() -> impl Iterator<Item = &'static str> {
    LIBRARY.iter().map(|(name, _)| *name)
}
