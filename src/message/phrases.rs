// Daily phrase catalogue

/// An idiom sent alongside the word of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPhrase {
    pub phrase: &'static str,
    pub meaning: &'static str,
}

impl DailyPhrase {
    pub const fn new(phrase: &'static str, meaning: &'static str) -> Self {
        Self { phrase, meaning }
    }
}

pub const DAILY_PHRASES: &[DailyPhrase] = &[
    // Happiness & Success
    DailyPhrase::new("On cloud nine", "Feeling extremely happy or elated"),
    DailyPhrase::new("Over the moon", "Very happy or delighted"),
    DailyPhrase::new("On top of the world", "Feeling extremely successful and happy"),
    DailyPhrase::new("In seventh heaven", "In a state of extreme happiness"),
    DailyPhrase::new("Walking on air", "Feeling very happy and excited"),

    // Time & Speed
    DailyPhrase::new("In the blink of an eye", "Very quickly, almost instantly"),
    DailyPhrase::new("In a jiffy", "Very quickly"),
    DailyPhrase::new("In the nick of time", "Just in time, at the last possible moment"),
    DailyPhrase::new("Time flies", "Time passes very quickly"),
    DailyPhrase::new("Kill time", "To do something to make time pass more quickly"),

    // Work & Effort
    DailyPhrase::new("Burning the midnight oil", "Working late into the night"),
    DailyPhrase::new("Go the extra mile", "To make a special effort to achieve something"),
    DailyPhrase::new("Pull your weight", "To do your fair share of work"),
    DailyPhrase::new("Put your nose to the grindstone", "To work very hard"),
    DailyPhrase::new("Work like a charm", "To work very well or effectively"),

    // Difficulty & Challenge
    DailyPhrase::new("A piece of cake", "Something very easy to do"),
    DailyPhrase::new("A walk in the park", "Something very easy to do"),
    DailyPhrase::new("A tough nut to crack", "A difficult problem to solve"),
    DailyPhrase::new("Between a rock and a hard place", "In a difficult situation with no good options"),
    DailyPhrase::new("Up a creek without a paddle", "In a difficult situation with no help"),

    // Luck & Success
    DailyPhrase::new("Break a leg", "Good luck (especially before a performance)"),
    DailyPhrase::new("Hit the jackpot", "To have great success or luck"),
    DailyPhrase::new("Strike gold", "To find something valuable or successful"),
    DailyPhrase::new("The sky's the limit", "There are no limits to what can be achieved"),
    DailyPhrase::new("On a roll", "Experiencing a period of success"),

    // Accuracy & Understanding
    DailyPhrase::new("Hit the nail on the head", "To be exactly right about something"),
    DailyPhrase::new("Get the picture", "To understand the situation"),
    DailyPhrase::new("Read between the lines", "To understand the hidden meaning"),
    DailyPhrase::new("Put two and two together", "To figure something out"),
    DailyPhrase::new("Dot your i's and cross your t's", "To be very careful and thorough"),

    // Health & Feelings
    DailyPhrase::new("Under the weather", "Feeling sick or unwell"),
    DailyPhrase::new("On pins and needles", "Very nervous or anxious"),
    DailyPhrase::new("Down in the dumps", "Feeling sad or depressed"),
    DailyPhrase::new("Over the hill", "Getting old"),
    DailyPhrase::new("Fit as a fiddle", "In very good health"),

    // Communication
    DailyPhrase::new("Spill the beans", "To reveal a secret"),
    DailyPhrase::new("Pull someone's leg", "To tease or joke with someone"),
    DailyPhrase::new("Beat around the bush", "To avoid talking about something directly"),
    DailyPhrase::new("Get straight to the point", "To talk about the most important thing immediately"),
    DailyPhrase::new("Put in a good word", "To say something positive about someone"),

    // Decision & Action
    DailyPhrase::new("The ball is in your court", "It's your turn to take action"),
    DailyPhrase::new("Cross that bridge when you come to it", "Deal with a problem when it happens"),
    DailyPhrase::new("Take the bull by the horns", "To deal with a problem directly"),
    DailyPhrase::new("Jump on the bandwagon", "To join a popular trend"),
    DailyPhrase::new("Throw in the towel", "To give up or surrender"),

    // Surprise & Revelation
    DailyPhrase::new("Bite the bullet", "To endure a painful situation bravely"),
    DailyPhrase::new("Let the cat out of the bag", "To reveal a secret accidentally"),
    DailyPhrase::new("The penny dropped", "To finally understand something"),
    DailyPhrase::new("Light at the end of the tunnel", "Hope that a difficult situation will end soon"),
    DailyPhrase::new("Turn over a new leaf", "To start behaving in a better way"),

    // Frequency & Rarity
    DailyPhrase::new("Once in a blue moon", "Very rarely"),
    DailyPhrase::new("Every now and then", "Occasionally"),
    DailyPhrase::new("Day in, day out", "Every day without change"),
    DailyPhrase::new("From time to time", "Occasionally"),
    DailyPhrase::new("Once in a lifetime", "Very rarely, perhaps only once"),

    // Relationships
    DailyPhrase::new("Get along like a house on fire", "To have a very good relationship"),
    DailyPhrase::new("See eye to eye", "To agree with someone"),
    DailyPhrase::new("Bury the hatchet", "To make peace with someone"),
    DailyPhrase::new("Go back to square one", "To start something again from the beginning"),
    DailyPhrase::new("Turn a blind eye", "To pretend not to see something"),
];
