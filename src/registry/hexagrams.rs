//! The canonical table, King Wen order.
//!
//! Keys are written in caster order (bottom line first, yang = `1`) and must
//! agree with the `lower`/`upper` trigram pair; `registry::validate` checks it.

use super::Hexagram;

pub(crate) static HEXAGRAMS: [Hexagram; 64] = [
    hexagram! {
        id: 1, key: "111111", name: "The Creative", local: "乾 Qián",
        upper: Qian, lower: Qian,
        judgment: "The Creative works sublime success, furthering through perseverance.",
        image: "Heaven moves with strength; the superior person makes themself strong and untiring.",
        explanation: "Pure yang: creative force at its fullest, initiating without pause.",
        revelation: "Power is available to you now, provided it serves a worthy aim.",
        guidance: "Act with steady persistence and keep your conduct upright.",
        lines: [
            ("Hidden dragon. Do not act.", "The time is not ripe; gather strength out of sight."),
            ("Dragon appearing in the field. It furthers one to see the great person.", "Your abilities begin to show; seek a mentor."),
            ("All day long the superior person is creatively active; at nightfall still watchful. Danger, no blame.", "Diligence keeps risk in check."),
            ("Wavering flight over the depths. No blame.", "Choose freely between advancing and withdrawing."),
            ("Flying dragon in the heavens. It furthers one to see the great person.", "Influence peaks; use it in harmony with others."),
            ("Arrogant dragon will have cause to repent.", "Overreaching leads to isolation; know when to stop."),
        ],
    },
    hexagram! {
        id: 2, key: "000000", name: "The Receptive", local: "坤 Kūn",
        upper: Kun, lower: Kun,
        judgment: "The Receptive brings sublime success, furthering through the perseverance of a mare.",
        image: "The earth's condition is receptive devotion; the superior person carries the outer world with breadth of character.",
        explanation: "Pure yin: yielding, nourishing, completing what the Creative begins.",
        revelation: "Following a sound lead will serve you better than forcing your own.",
        guidance: "Be supportive and patient; let events unfold before acting.",
        lines: [
            ("When there is hoarfrost underfoot, solid ice is not far off.", "Heed early signs of decline."),
            ("Straight, square, great. Without purpose, yet nothing remains unfurthered.", "Act naturally and things go well."),
            ("Hidden lines. One is able to remain persevering.", "Keep your gifts modest and finish the work of others."),
            ("A tied-up sack. No blame, no praise.", "Discretion protects you in uncertain times."),
            ("A yellow lower garment brings supreme good fortune.", "Genuine modesty earns lasting trust."),
            ("Dragons fight in the meadow. Their blood is black and yellow.", "Pushing beyond your role brings conflict."),
        ],
    },
    hexagram! {
        id: 3, key: "100010", name: "Difficulty at the Beginning", local: "屯 Zhūn",
        upper: Kan, lower: Zhen,
        judgment: "Difficulty at the beginning works supreme success. One should not undertake anything; it furthers one to appoint helpers.",
        image: "Clouds and thunder; the superior person brings order out of confusion.",
        explanation: "New growth pushes through hard ground; chaos precedes form.",
        revelation: "Early obstacles are a sign of birth, not of failure.",
        guidance: "Organize carefully and enlist help instead of pushing ahead alone.",
        lines: [
            ("Hesitation and hindrance. It furthers one to remain persevering and to appoint helpers.", "Pause, but keep your aim."),
            ("Difficulties pile up. Horse and wagon part. The maiden waits ten years.", "Do not accept help that binds you wrongly."),
            ("Whoever hunts deer without the forester only loses his way in the forest.", "Without guidance, stop rather than blunder on."),
            ("Horse and wagon part. Strive for union. To go brings good fortune.", "Accept the help that is offered."),
            ("Difficulties in blessing. A little perseverance brings good fortune; great perseverance brings misfortune.", "Move in small steps."),
            ("Horse and wagon part. Bloody tears flow.", "Do not give up in despair at the last hurdle."),
        ],
    },
    hexagram! {
        id: 4, key: "010001", name: "Youthful Folly", local: "蒙 Méng",
        upper: Gen, lower: Kan,
        judgment: "It is not I who seek the young fool; the young fool seeks me. At the first oracle I inform him; if he asks two or three times, it is importunity.",
        image: "A spring wells up at the foot of the mountain; the superior person fosters character by thoroughness.",
        explanation: "Inexperience meets the need to learn; a teacher is required.",
        revelation: "You lack a piece of understanding that someone else can give.",
        guidance: "Ask sincerely once, then listen and practise.",
        lines: [
            ("To make a fool develop, it furthers one to apply discipline.", "Structure helps learning, but not harshness."),
            ("To bear with fools in kindliness brings good fortune.", "Patience with others earns responsibility."),
            ("Take not a maiden who, when she sees a man of bronze, loses possession of herself.", "Do not chase what merely dazzles."),
            ("Entangled folly brings humiliation.", "Clinging to fantasy leaves you stuck."),
            ("Childlike folly brings good fortune.", "Humble openness invites instruction."),
            ("In punishing folly it does not further one to commit transgressions.", "Correct faults without cruelty."),
        ],
    },
    hexagram! {
        id: 5, key: "111010", name: "Waiting", local: "需 Xū",
        upper: Kan, lower: Qian,
        judgment: "Waiting. If you are sincere, you have light and success. Perseverance brings good fortune. It furthers one to cross the great water.",
        image: "Clouds rise up to heaven; the superior person eats, drinks, and is joyous and of good cheer.",
        explanation: "Strength faces danger ahead and must wait for the right moment.",
        revelation: "What you want is coming, but not on your schedule.",
        guidance: "Nourish yourself and stay calm; act when the way is clear.",
        lines: [
            ("Waiting in the meadow. It furthers one to abide in what endures.", "Keep to your routine while danger is distant."),
            ("Waiting on the sand. There is some gossip. The end brings good fortune.", "Ignore small talk; stay composed."),
            ("Waiting in the mud brings about the arrival of the enemy.", "Premature moves invite trouble."),
            ("Waiting in blood. Get out of the pit.", "In real danger, stand still and let fate pass."),
            ("Waiting at meat and drink. Perseverance brings good fortune.", "Enjoy the respite, but stay focused."),
            ("One falls into the pit. Three uninvited guests arrive. Honor them, and in the end there will be good fortune.", "Unexpected help may come in odd form."),
        ],
    },
    hexagram! {
        id: 6, key: "010111", name: "Conflict", local: "訟 Sòng",
        upper: Qian, lower: Kan,
        judgment: "Conflict. You are sincere and are being obstructed. A cautious halt halfway brings good fortune; going through to the end brings misfortune.",
        image: "Heaven and water go their opposite ways; the superior person carefully considers the beginning of every undertaking.",
        explanation: "Inner danger against outer strength: a dispute neither side can fully win.",
        revelation: "Being right is not the same as prevailing.",
        guidance: "Seek arbitration and avoid escalating the quarrel.",
        lines: [
            ("If one does not perpetuate the affair, there is a little gossip. In the end, good fortune comes.", "Drop the matter early."),
            ("One cannot engage in conflict; one returns home.", "Retreat from a stronger opponent without shame."),
            ("To nourish oneself on ancient virtue induces perseverance.", "Rely on what is genuinely yours."),
            ("One cannot engage in conflict. One turns back and submits to fate.", "Accept the limits and find peace."),
            ("To contend before him brings supreme good fortune.", "A fair arbiter settles the dispute."),
            ("Even if by chance a leather belt is bestowed, by the end of a morning it will have been snatched away three times.", "Victory won by contention does not last."),
        ],
    },
    hexagram! {
        id: 7, key: "010000", name: "The Army", local: "師 Shī",
        upper: Kun, lower: Kan,
        judgment: "The army needs perseverance and a strong leader. Good fortune without blame.",
        image: "In the middle of the earth is water; the superior person increases the masses by generosity toward the people.",
        explanation: "Hidden danger organized under discipline; collective force in service of order.",
        revelation: "Success depends on leadership and cohesion.",
        guidance: "Organize, set clear purpose, and follow capable leadership.",
        lines: [
            ("An army must set forth in proper order. If the order is not good, misfortune threatens.", "Start with sound organization."),
            ("In the midst of the army. Good fortune. No blame.", "Lead from among your people."),
            ("Perchance the army carries corpses in the wagon. Misfortune.", "Divided command courts disaster."),
            ("The army retreats. No blame.", "A timely retreat is wise."),
            ("There is game in the field. It furthers one to catch it. Let the eldest lead the army.", "Act with restraint and appoint the experienced."),
            ("The great prince issues commands, founds states, vests families with fiefs. Inferior people should not be employed.", "Reward merit, not opportunism."),
        ],
    },
    hexagram! {
        id: 8, key: "000010", name: "Holding Together", local: "比 Bǐ",
        upper: Kan, lower: Kun,
        judgment: "Holding together brings good fortune. Inquire of the oracle once again whether you possess sublimity, constancy, and perseverance.",
        image: "On the earth is water; the kings of antiquity bestowed the different states as fiefs and cultivated friendly relations.",
        explanation: "Water on earth flows together: union around a central figure.",
        revelation: "Now is the time to join or form a community.",
        guidance: "Commit sincerely and do not hesitate too long.",
        lines: [
            ("Hold to him in truth and loyalty; this is without blame.", "Sincerity is the basis of union."),
            ("Hold to him inwardly. Perseverance brings good fortune.", "Keep your inner integrity."),
            ("You hold together with the wrong people.", "Beware of false intimacy."),
            ("Hold to him outwardly also. Perseverance brings good fortune.", "Show loyalty openly."),
            ("Manifestation of holding together. The king uses beaters on three sides only.", "Let people come freely."),
            ("He finds no head for holding together. Misfortune.", "Miss the moment and the union fails."),
        ],
    },
    hexagram! {
        id: 9, key: "111011", name: "The Taming Power of the Small", local: "小畜 Xiǎo Chù",
        upper: Xun, lower: Qian,
        judgment: "The taming power of the small has success. Dense clouds, no rain from our western region.",
        image: "The wind drives across heaven; the superior person refines the outward aspect of their nature.",
        explanation: "Gentle restraint holds back great strength for a while.",
        revelation: "Small influences accumulate; the breakthrough is not yet.",
        guidance: "Work on details and exercise gentle persuasion.",
        lines: [
            ("Return to the way. How could there be blame in this?", "Go back to your own path."),
            ("He allows himself to be drawn into returning. Good fortune.", "Follow the example of like-minded people."),
            ("The spokes burst out of the wagon wheels. Man and wife roll their eyes.", "Forcing progress breaks the vehicle."),
            ("If you are sincere, blood vanishes and fear gives way. No blame.", "Honesty defuses danger."),
            ("If you are sincere and loyally attached, you are rich in your neighbor.", "Shared trust multiplies strength."),
            ("The rain comes, there is rest. This is due to the lasting effect of character.", "Stop while success is secured."),
        ],
    },
    hexagram! {
        id: 10, key: "110111", name: "Treading", local: "履 Lǚ",
        upper: Qian, lower: Dui,
        judgment: "Treading upon the tail of the tiger. It does not bite the man. Success.",
        image: "Heaven above, the lake below; the superior person discriminates between high and low.",
        explanation: "The weak treads carefully behind the strong; conduct decides the outcome.",
        revelation: "A risky situation can be navigated with good manners.",
        guidance: "Proceed with courtesy and awareness of your position.",
        lines: [
            ("Simple conduct. Progress without blame.", "Walk your own plain way."),
            ("Treading a smooth, level course. The perseverance of a dark man brings good fortune.", "Stay independent and modest."),
            ("A one-eyed man is able to see, a lame man is able to tread. He treads on the tail of the tiger. The tiger bites.", "Overestimating yourself invites harm."),
            ("He treads on the tail of the tiger. Caution and circumspection lead ultimately to good fortune.", "Careful action prevails."),
            ("Resolute conduct. Perseverance with awareness of danger.", "Be firm, yet know the risks."),
            ("Look to your conduct and weigh the favorable signs.", "Judge by the consequences of your deeds."),
        ],
    },
    hexagram! {
        id: 11, key: "111000", name: "Peace", local: "泰 Tài",
        upper: Kun, lower: Qian,
        judgment: "Peace. The small departs, the great approaches. Good fortune. Success.",
        image: "Heaven and earth unite; the ruler divides and completes the course of heaven and earth.",
        explanation: "Heaven below, earth above: forces meet and everything flourishes.",
        revelation: "A period of harmony and growth is at hand.",
        guidance: "Use the good time to build; do not grow complacent.",
        lines: [
            ("When ribbon grass is pulled up, the sod comes with it. Each according to his kind. Undertakings bring good fortune.", "Like-minded people advance together."),
            ("Bearing with the uncultured in gentleness, fording the river with resolution.", "Be broad-minded and decisive."),
            ("No plain not followed by a slope. No going not followed by a return.", "Every peak declines; stay faithful."),
            ("He flutters down, not boasting of his wealth, together with his neighbor.", "Meet others as equals."),
            ("The sovereign gives his daughter in marriage. This brings blessing and supreme good fortune.", "Humility in high position brings reward."),
            ("The wall falls back into the moat. Use no army now.", "Decline has begun; do not resist by force."),
        ],
    },
    hexagram! {
        id: 12, key: "000111", name: "Standstill", local: "否 Pǐ",
        upper: Qian, lower: Kun,
        judgment: "Standstill. Evil people do not further the perseverance of the superior person. The great departs; the small approaches.",
        image: "Heaven and earth do not unite; the superior person falls back on inner worth to escape difficulties.",
        explanation: "Heaven withdraws upward, earth sinks down: communication fails.",
        revelation: "This is a period of stagnation that effort alone cannot break.",
        guidance: "Keep your principles and wait without compromising them.",
        lines: [
            ("When ribbon grass is pulled up, the sod comes with it. Perseverance brings good fortune.", "Withdraw together with kindred spirits."),
            ("They bear and endure; this means good fortune for inferior people.", "Do not flatter your way out."),
            ("They bear shame.", "Those who rose improperly begin to feel it."),
            ("He who acts at the command of the highest remains without blame.", "Act only with a true mandate."),
            ("Standstill is giving way. Good fortune for the great person.", "Secure the turn carefully."),
            ("The standstill comes to an end. First standstill, then good fortune.", "Effort now ends the stagnation."),
        ],
    },
    hexagram! {
        id: 13, key: "101111", name: "Fellowship with Men", local: "同人 Tóng Rén",
        upper: Qian, lower: Li,
        judgment: "Fellowship with men in the open. Success. It furthers one to cross the great water.",
        image: "Heaven together with fire; the superior person organizes the clans and makes distinctions between things.",
        explanation: "Clarity within, strength without: fellowship based on shared aims.",
        revelation: "Common purpose will carry you further than private interest.",
        guidance: "Be open, include others, and organize fairly.",
        lines: [
            ("Fellowship with men at the gate. No blame.", "Begin on equal footing."),
            ("Fellowship with men in the clan. Humiliation.", "Factions breed regret."),
            ("He hides weapons in the thicket and climbs the high hill in front of it. For three years he does not rise up.", "Mistrust delays fellowship."),
            ("He climbs up on his wall; he cannot attack. Good fortune.", "Reconsider before attacking."),
            ("Men bound in fellowship first weep and lament, but afterward they laugh.", "Separated hearts reunite."),
            ("Fellowship with men in the meadow. No remorse.", "Loose ties, no lasting regret."),
        ],
    },
    hexagram! {
        id: 14, key: "111101", name: "Possession in Great Measure", local: "大有 Dà Yǒu",
        upper: Li, lower: Qian,
        judgment: "Possession in great measure. Supreme success.",
        image: "Fire in heaven above; the superior person curbs evil and furthers good.",
        explanation: "Clarity above strength: abundance held by modest leadership.",
        revelation: "Resources and recognition are within reach.",
        guidance: "Share generously and stay humble amid plenty.",
        lines: [
            ("No relationship with what is harmful; there is no blame in this.", "Stay aware of the pitfalls of wealth."),
            ("A big wagon for loading. One may undertake something.", "Capable helpers can carry the load."),
            ("A prince offers it to the Son of Heaven. A petty man cannot do this.", "Place your wealth in service."),
            ("He makes a difference between himself and his neighbor. No blame.", "Do not compete in display."),
            ("He whose truth is accessible, yet dignified, has good fortune.", "Sincerity with dignity commands respect."),
            ("He is blessed by heaven. Good fortune. Nothing that does not further.", "Devotion brings lasting blessing."),
        ],
    },
    hexagram! {
        id: 15, key: "001000", name: "Modesty", local: "謙 Qiān",
        upper: Kun, lower: Gen,
        judgment: "Modesty creates success. The superior person carries things through.",
        image: "Within the earth, a mountain; the superior person reduces that which is too much and augments that which is too little.",
        explanation: "The mountain hidden beneath the earth: greatness that does not display itself.",
        revelation: "Understatement will achieve more than self-promotion.",
        guidance: "Balance excess and lack; let results speak.",
        lines: [
            ("A superior person modest about his modesty may cross the great water. Good fortune.", "Quiet competence succeeds."),
            ("Modesty that comes to expression. Perseverance brings good fortune.", "Inner modesty shows outwardly."),
            ("A superior person of modesty and merit carries things to conclusion. Good fortune.", "Merit without boasting wins support."),
            ("Nothing that would not further modesty in movement.", "Keep modesty active, not passive."),
            ("No boasting of wealth before one's neighbor. It is favorable to attack with force.", "Modesty may still require firmness."),
            ("Modesty that comes to expression. It is favorable to set armies marching to chastise one's own city.", "Discipline yourself first."),
        ],
    },
    hexagram! {
        id: 16, key: "000100", name: "Enthusiasm", local: "豫 Yù",
        upper: Zhen, lower: Kun,
        judgment: "Enthusiasm. It furthers one to install helpers and to set armies marching.",
        image: "Thunder comes resounding out of the earth; the ancient kings made music in order to honor merit.",
        explanation: "Movement meeting devotion: shared enthusiasm mobilizes people.",
        revelation: "Inspiration can carry others with you.",
        guidance: "Prepare well and move with the mood of the people.",
        lines: [
            ("Enthusiasm that expresses itself brings misfortune.", "Boasting about connections backfires."),
            ("Firm as a rock. Not a whole day. Perseverance brings good fortune.", "Recognize signs early and act."),
            ("Enthusiasm that looks upward creates remorse. Hesitation brings remorse.", "Do not wait passively for others."),
            ("The source of enthusiasm. He achieves great things. Doubt not.", "Confidence attracts companions."),
            ("Persistently ill, and still does not die.", "Constant pressure keeps you alert."),
            ("Deluded enthusiasm. But if after completion one changes, there is no blame.", "Wake from illusion."),
        ],
    },
    hexagram! {
        id: 17, key: "100110", name: "Following", local: "隨 Suí",
        upper: Dui, lower: Zhen,
        judgment: "Following has supreme success. Perseverance furthers. No blame.",
        image: "Thunder in the middle of the lake; at nightfall the superior person goes indoors for rest and recuperation.",
        explanation: "Movement beneath joy: others follow willingly when one first adapts.",
        revelation: "To lead well, you must first know how to follow.",
        guidance: "Adapt to the time and rest when rest is due.",
        lines: [
            ("The standard is changing. Perseverance brings good fortune. To go out of the door in company produces deeds.", "Be open to views outside your circle."),
            ("If one clings to the little boy, one loses the strong man.", "Choose your associations carefully."),
            ("If one clings to the strong man, one loses the little boy.", "Letting go of the lesser is necessary."),
            ("Following creates success. Perseverance brings misfortune.", "Beware of flatterers' motives."),
            ("Sincere in the good. Good fortune.", "Follow what is truly good."),
            ("He meets with firm allegiance and is still further bound.", "A deep bond draws you back to serve."),
        ],
    },
    hexagram! {
        id: 18, key: "011001", name: "Work on What Has Been Spoiled", local: "蠱 Gǔ",
        upper: Gen, lower: Xun,
        judgment: "Work on what has been spoiled has supreme success. Before the starting point, three days. After the starting point, three days.",
        image: "The wind blows low on the mountain; the superior person stirs up the people and strengthens their spirit.",
        explanation: "Stagnation and decay call for deliberate repair.",
        revelation: "Old neglect must be faced before new growth is possible.",
        guidance: "Investigate causes, then act decisively and follow through.",
        lines: [
            ("Setting right what has been spoiled by the father. There is no blame.", "Reform inherited mistakes."),
            ("Setting right what has been spoiled by the mother. One must not be too persevering.", "Correct gently."),
            ("Setting right what has been spoiled by the father. There will be a little remorse. No great blame.", "Vigor may overshoot but is forgiven."),
            ("Tolerating what has been spoiled by the father. In continuing one sees humiliation.", "Passivity lets decay spread."),
            ("Setting right what has been spoiled by the father. One meets with praise.", "Able helpers earn recognition."),
            ("He does not serve kings and princes, sets himself higher goals.", "Withdraw to pursue higher aims."),
        ],
    },
    hexagram! {
        id: 19, key: "110000", name: "Approach", local: "臨 Lín",
        upper: Kun, lower: Dui,
        judgment: "Approach has supreme success. Perseverance furthers. When the eighth month comes, there will be misfortune.",
        image: "The earth above the lake; the superior person is inexhaustible in the will to teach.",
        explanation: "Yang advances: an approaching period of growth and influence.",
        revelation: "Good times are coming, but they carry their own end.",
        guidance: "Use the favorable approach while guarding against later decline.",
        lines: [
            ("Joint approach. Perseverance brings good fortune.", "Rise together with good company."),
            ("Joint approach. Good fortune. Everything furthers.", "Favor from above supports you."),
            ("Comfortable approach. Nothing that would further.", "Ease breeds carelessness."),
            ("Complete approach. No blame.", "Openness to capable people helps."),
            ("Wise approach. This is right for a great prince.", "Choose the right people and trust them."),
            ("Greathearted approach. Good fortune. No blame.", "Return to teach and help."),
        ],
    },
    hexagram! {
        id: 20, key: "000011", name: "Contemplation", local: "觀 Guān",
        upper: Xun, lower: Kun,
        judgment: "Contemplation. The ablution has been made, but not yet the offering. Full of trust they look up to him.",
        image: "The wind blows over the earth; the kings of old visited the regions of the world and gave instruction.",
        explanation: "A tower that both sees far and is seen from afar.",
        revelation: "You gain understanding by observing rather than acting.",
        guidance: "Look deeply and let your example instruct others.",
        lines: [
            ("Boylike contemplation. For an inferior man, no blame. For a superior man, humiliation.", "Superficial views will not do."),
            ("Contemplation through the crack of the door.", "A narrow view limits you."),
            ("Contemplation of my life decides the choice between advance and retreat.", "Reflect on your own effects."),
            ("Contemplation of the light of the kingdom.", "Understand the whole to serve it."),
            ("Contemplation of my life. The superior man is without blame.", "Judge yourself by your influence."),
            ("Contemplation of his life. The superior man is without blame.", "Detached self-knowledge."),
        ],
    },
    hexagram! {
        id: 21, key: "100101", name: "Biting Through", local: "噬嗑 Shì Kè",
        upper: Li, lower: Zhen,
        judgment: "Biting through has success. It is favorable to let justice be administered.",
        image: "Thunder and lightning; the kings of former times made firm the laws through clearly defined penalties.",
        explanation: "An obstacle between the jaws must be bitten through.",
        revelation: "Something is blocking unity and must be dealt with firmly.",
        guidance: "Confront the obstruction energetically and fairly.",
        lines: [
            ("His feet are fastened in the stocks, so that his toes disappear. No blame.", "A mild early correction suffices."),
            ("Bites through tender meat, so that his nose disappears. No blame.", "Zeal may overshoot, but the cause is just."),
            ("Bites on old dried meat and strikes on something poisonous. Slight humiliation. No blame.", "Old grievances resist settlement."),
            ("Bites on dried gristly meat. Receives metal arrows. It furthers one to be mindful of difficulties.", "Hard obstacles demand persistence."),
            ("Bites on dried lean meat. Receives yellow gold. Perseveringly aware of danger. No blame.", "Be impartial yet firm."),
            ("His neck is fastened in the wooden cangue, so that his ears disappear. Misfortune.", "Ignoring warnings brings punishment."),
        ],
    },
    hexagram! {
        id: 22, key: "101001", name: "Grace", local: "賁 Bì",
        upper: Gen, lower: Li,
        judgment: "Grace has success. In small matters it is favorable to undertake something.",
        image: "Fire at the foot of the mountain; the superior person clarifies current affairs but dare not decide controversial issues this way.",
        explanation: "Beauty and form adorn substance but do not replace it.",
        revelation: "Appearances matter now, though only in small things.",
        guidance: "Attend to form and presentation without mistaking them for content.",
        lines: [
            ("He lends grace to his toes, leaves the carriage, and walks.", "Prefer honest effort to borrowed comfort."),
            ("Lends grace to the beard on his chin.", "Ornament follows substance."),
            ("Graceful and moist. Constant perseverance brings good fortune.", "Do not sink into pleasant ease."),
            ("Grace or simplicity? A white horse comes as if on wings.", "Choose sincerity over show."),
            ("Grace in hills and gardens. The roll of silk is meager and small. Humiliation, but in the end good fortune.", "A modest gift sincerely given suffices."),
            ("Simple grace. No blame.", "True grace is unadorned."),
        ],
    },
    hexagram! {
        id: 23, key: "000001", name: "Splitting Apart", local: "剝 Bō",
        upper: Gen, lower: Kun,
        judgment: "Splitting apart. It does not further one to go anywhere.",
        image: "The mountain rests on the earth; those above can ensure their position only by giving generously to those below.",
        explanation: "Yin has nearly displaced yang: erosion from below.",
        revelation: "Decline is under way; resisting it head-on will not help.",
        guidance: "Stay still, strengthen your base, and wait for renewal.",
        lines: [
            ("The leg of the bed is split. Those who persevere are destroyed. Misfortune.", "Undermining starts at the base."),
            ("The bed is split at the edge. Those who persevere are destroyed. Misfortune.", "Isolation deepens the danger."),
            ("He splits with them. No blame.", "Breaking with bad company is right."),
            ("The bed is split up to the skin. Misfortune.", "The damage now reaches you."),
            ("A shoal of fishes. Favor comes through the court ladies. Everything acts to further.", "Yielding to the good restores order."),
            ("There is a large fruit still uneaten. The superior man receives a carriage. The house of the inferior man is split apart.", "The seed of renewal survives."),
        ],
    },
    hexagram! {
        id: 24, key: "100000", name: "Return", local: "復 Fù",
        upper: Kun, lower: Zhen,
        judgment: "Return. Success. Going out and coming in without error. Friends come without blame. On the seventh day comes return.",
        image: "Thunder within the earth; the kings of antiquity closed the passes at the time of solstice.",
        explanation: "One yang line returns at the bottom: the turning point after decline.",
        revelation: "The light is returning; a new cycle has begun.",
        guidance: "Nurture the new beginning gently; do not force it.",
        lines: [
            ("Return from a short distance. No need for remorse. Great good fortune.", "Correct course early."),
            ("Quiet return. Good fortune.", "Follow a good example."),
            ("Repeated return. Danger. No blame.", "Keep returning despite lapses."),
            ("Walking in the midst of others, one returns alone.", "Follow your conscience even if alone."),
            ("Noblehearted return. No remorse.", "Admit mistakes honestly."),
            ("Missing the return. Misfortune.", "Obstinacy misses the turning point."),
        ],
    },
    hexagram! {
        id: 25, key: "100111", name: "Innocence", local: "無妄 Wú Wàng",
        upper: Qian, lower: Zhen,
        judgment: "Innocence. Supreme success. Perseverance furthers. If someone is not as he should be, he has misfortune.",
        image: "Under heaven thunder rolls; all things attain the natural state of innocence.",
        explanation: "Movement in accord with heaven: acting without ulterior motive.",
        revelation: "Spontaneous, sincere action is favored; scheming is not.",
        guidance: "Act from genuine impulse and let go of expectation.",
        lines: [
            ("Innocent behavior brings good fortune.", "Trust your original impulse."),
            ("If one does not count on the harvest while plowing, it furthers one to undertake something.", "Do the work without fixating on reward."),
            ("Undeserved misfortune. The cow tethered by someone is the wanderer's gain, the citizen's loss.", "Accept what you did not cause."),
            ("He who can be persevering remains without blame.", "Hold to what is truly yours."),
            ("Use no medicine in an illness incurred through no fault of your own.", "Let innocent trouble pass by itself."),
            ("Innocent action brings misfortune. Nothing furthers.", "When the time is wrong, wait."),
        ],
    },
    hexagram! {
        id: 26, key: "111001", name: "The Taming Power of the Great", local: "大畜 Dà Chù",
        upper: Gen, lower: Qian,
        judgment: "The taming power of the great. Perseverance furthers. Not eating at home brings good fortune. It furthers one to cross the great water.",
        image: "Heaven within the mountain; the superior person acquaints themself with many sayings of antiquity and deeds of the past.",
        explanation: "Great strength held and stored by stillness.",
        revelation: "Restraint now builds reserves for great deeds later.",
        guidance: "Study, accumulate, and keep your energy disciplined.",
        lines: [
            ("Danger is at hand. It furthers one to desist.", "Wait for release."),
            ("The axletrees are taken from the wagon.", "Accept the check and rest."),
            ("A good horse that follows others. Awareness of danger, with perseverance, furthers.", "Advance with a clear aim and caution."),
            ("The headboard of a young bull. Great good fortune.", "Prevent force before it grows."),
            ("The tusk of a gelded boar. Good fortune.", "Address the root of aggression."),
            ("One attains the way of heaven. Success.", "The obstruction dissolves."),
        ],
    },
    hexagram! {
        id: 27, key: "100001", name: "The Corners of the Mouth", local: "頤 Yí",
        upper: Gen, lower: Zhen,
        judgment: "The corners of the mouth. Perseverance brings good fortune. Pay heed to the providing of nourishment and to what a man seeks to fill his own mouth with.",
        image: "At the foot of the mountain, thunder; the superior person is careful of words and temperate in eating and drinking.",
        explanation: "An open mouth: the question of what one takes in and gives out.",
        revelation: "What nourishes you, body and mind, is the real issue.",
        guidance: "Choose your nourishment and your words with care.",
        lines: [
            ("You let your magic tortoise go and look at me with the corners of your mouth drooping. Misfortune.", "Envy of others wastes your own gifts."),
            ("Turning to the summit for nourishment, deviating from the path. Continuing brings misfortune.", "Do not depend on undeserved support."),
            ("Turning away from nourishment. Perseverance brings misfortune.", "Chasing gratification never satisfies."),
            ("Turning to the summit for provision of nourishment brings good fortune.", "Seek help for a worthy cause."),
            ("Turning away from the path. To remain persevering brings good fortune.", "Lean on a wiser guide."),
            ("The source of nourishment. Awareness of danger brings good fortune.", "Provide for others responsibly."),
        ],
    },
    hexagram! {
        id: 28, key: "011110", name: "Preponderance of the Great", local: "大過 Dà Guò",
        upper: Dui, lower: Xun,
        judgment: "Preponderance of the great. The ridgepole sags to the breaking point. It furthers one to have somewhere to go.",
        image: "The lake rises above the trees; the superior person, when standing alone, is unconcerned.",
        explanation: "Heavy in the middle, weak at the ends: a structure under excessive load.",
        revelation: "The situation is extraordinary and cannot continue as it is.",
        guidance: "Act gently but promptly to relieve the strain.",
        lines: [
            ("To spread white rushes underneath. No blame.", "Extra caution at the start."),
            ("A dry poplar sprouts at the root. An older man takes a young wife.", "Unusual renewal is possible."),
            ("The ridgepole sags to the breaking point. Misfortune.", "Pushing alone ends in collapse."),
            ("The ridgepole is braced. Good fortune.", "Support arrives; use it unselfishly."),
            ("A withered poplar puts forth flowers. An older woman takes a husband.", "Show without substance."),
            ("One must go through the water. It goes over one's head. Misfortune. No blame.", "Sacrifice for a cause is blameless."),
        ],
    },
    hexagram! {
        id: 29, key: "010010", name: "The Abysmal", local: "坎 Kǎn",
        upper: Kan, lower: Kan,
        judgment: "The abysmal repeated. If you are sincere, you have success in your heart, and whatever you do succeeds.",
        image: "Water flows on uninterruptedly and reaches its goal; the superior person walks in lasting virtue.",
        explanation: "Danger upon danger; water keeps flowing without losing itself.",
        revelation: "You are in a hazard that must be crossed, not escaped.",
        guidance: "Stay sincere and keep moving, like water filling every hollow.",
        lines: [
            ("Repetition of the abysmal. In the abyss one falls into a pit. Misfortune.", "Habitual danger dulls judgment."),
            ("The abyss is dangerous. One should strive to attain small things only.", "Aim at small, achievable steps."),
            ("Forward and backward, abyss on abyss. Do not act in this way.", "Wait instead of struggling."),
            ("A jug of wine, a bowl of rice with it; earthen vessels simply handed in through the window.", "Simple sincerity suffices."),
            ("The abyss is not filled to overflowing, it is filled only to the rim. No blame.", "Do not overreach; flow out."),
            ("Bound with cords and ropes, shut in between thorn-hedged prison walls. Misfortune.", "Lost your way; endure."),
        ],
    },
    hexagram! {
        id: 30, key: "101101", name: "The Clinging", local: "離 Lí",
        upper: Li, lower: Li,
        judgment: "The clinging. Perseverance furthers. It brings success. Care of the cow brings good fortune.",
        image: "That which is bright rises twice; the great person illumines the four quarters of the world.",
        explanation: "Fire clings to what it burns: clarity depends on what sustains it.",
        revelation: "Your light shines through what you attach yourself to.",
        guidance: "Cultivate docility and depend on what is right.",
        lines: [
            ("The footprints run crisscross. If one is seriously intent, no blame.", "Be composed at the start."),
            ("Yellow light. Supreme good fortune.", "Balance and moderation."),
            ("In the light of the setting sun, men either beat the pot and sing or loudly bewail the approach of old age.", "Accept transience calmly."),
            ("Its coming is sudden; it flames up, dies down, is thrown away.", "Brilliance without depth burns out."),
            ("Tears in floods, sighing and lamenting. Good fortune.", "Genuine change of heart."),
            ("The king uses him to march forth and chastise.", "Remove the ringleaders, spare the rest."),
        ],
    },
    hexagram! {
        id: 31, key: "001110", name: "Influence", local: "咸 Xián",
        upper: Dui, lower: Gen,
        judgment: "Influence. Success. Perseverance furthers. To take a maiden to wife brings good fortune.",
        image: "A lake on the mountain; the superior person encourages people to approach by their readiness to receive.",
        explanation: "Stillness below, joy above: mutual attraction and courtship.",
        revelation: "Receptivity draws others to you more than pursuit does.",
        guidance: "Stay open and let influence work without manipulation.",
        lines: [
            ("The influence shows itself in the big toe.", "An intention not yet visible."),
            ("The influence shows itself in the calves of the legs. Misfortune. Tarrying brings good fortune.", "Wait for the real impulse."),
            ("The influence shows itself in the thighs. Holds to that which follows it. To continue is humiliating.", "Do not run after every whim."),
            ("Perseverance brings good fortune. If a man is agitated in mind, only those friends follow whom he thinks of.", "Influence through steadiness, not scheming."),
            ("The influence shows itself in the back of the neck. No remorse.", "Firm will, unswayed."),
            ("The influence shows itself in the jaws, cheeks, and tongue.", "Mere talk has little effect."),
        ],
    },
    hexagram! {
        id: 32, key: "011100", name: "Duration", local: "恆 Héng",
        upper: Zhen, lower: Xun,
        judgment: "Duration. Success. No blame. Perseverance furthers. It furthers one to have somewhere to go.",
        image: "Thunder and wind; the superior person stands firm and does not change direction.",
        explanation: "Lasting union through constant renewal.",
        revelation: "Endurance, not novelty, is what the moment asks.",
        guidance: "Keep your direction and adapt only your methods.",
        lines: [
            ("Seeking duration too hastily brings misfortune persistently.", "Lasting things take time."),
            ("Remorse disappears.", "Moderation keeps you steady."),
            ("He who does not give duration to his character meets with disgrace.", "Inconsistency brings humiliation."),
            ("No game in the field.", "Persistence in the wrong place yields nothing."),
            ("Giving duration to one's character through perseverance.", "Constancy suited to your role."),
            ("Restlessness as an enduring condition brings misfortune.", "Haste without depth fails."),
        ],
    },
    hexagram! {
        id: 33, key: "001111", name: "Retreat", local: "遯 Dùn",
        upper: Qian, lower: Gen,
        judgment: "Retreat. Success. In what is small, perseverance furthers.",
        image: "Mountain under heaven; the superior person keeps the inferior at a distance, not angrily but with reserve.",
        explanation: "Yin advances from below; strength withdraws in good order.",
        revelation: "Retreat now is strength, not defeat.",
        guidance: "Withdraw in time and keep your dignity.",
        lines: [
            ("At the tail in retreat. This is dangerous. One must not wish to undertake anything.", "Stay still when caught late."),
            ("He holds him fast with yellow oxhide. No one can tear him loose.", "Hold firmly to what is right."),
            ("A halted retreat is nerve-wracking and dangerous.", "Entanglements hinder withdrawal."),
            ("Voluntary retreat brings good fortune to the superior person.", "Leave gracefully."),
            ("Friendly retreat. Perseverance brings good fortune.", "Withdraw courteously but firmly."),
            ("Cheerful retreat. Everything serves to further.", "Freed of doubt, depart lightly."),
        ],
    },
    hexagram! {
        id: 34, key: "111100", name: "The Power of the Great", local: "大壯 Dà Zhuàng",
        upper: Zhen, lower: Qian,
        judgment: "The power of the great. Perseverance furthers.",
        image: "Thunder in heaven above; the superior person does not tread upon paths that do not accord with established order.",
        explanation: "Strong movement: power that must be joined with right.",
        revelation: "You have great force at your disposal.",
        guidance: "Use power only in accord with what is just.",
        lines: [
            ("Power in the toes. Continuing brings misfortune.", "Do not force an early advance."),
            ("Perseverance brings good fortune.", "Success should not make you reckless."),
            ("The inferior man works through power. The superior man does not act thus.", "Butting ahead gets you stuck."),
            ("Perseverance brings good fortune. The hedge opens; there is no entanglement.", "Quiet persistence clears the way."),
            ("Loses the goat with ease. No remorse.", "Drop obstinacy."),
            ("A goat butts against a hedge. It cannot go backward, it cannot go forward.", "Recognize the deadlock and yield."),
        ],
    },
    hexagram! {
        id: 35, key: "000101", name: "Progress", local: "晉 Jìn",
        upper: Li, lower: Kun,
        judgment: "Progress. The powerful prince is honored with horses in large numbers. In a single day he is granted audience three times.",
        image: "The sun rises over the earth; the superior person brightens their bright virtue.",
        explanation: "The sun rising over the earth: rapid, easy advance.",
        revelation: "Recognition and progress come readily now.",
        guidance: "Advance openly and use your position to benefit others.",
        lines: [
            ("Progressing, but turned back. Perseverance brings good fortune.", "Stay calm when not yet trusted."),
            ("Progressing, but in sorrow. Perseverance brings good fortune.", "Blessing comes from an unexpected source."),
            ("All are in accord. Remorse vanishes.", "Shared aims carry you forward."),
            ("Progress like a hamster. Perseverance brings danger.", "Dubious gains are exposed."),
            ("Remorse disappears. Take not gain and loss to heart.", "Do not fret over outcomes."),
            ("Making progress with the horns is permissible only for the purpose of punishing one's own city.", "Be strict with yourself."),
        ],
    },
    hexagram! {
        id: 36, key: "101000", name: "Darkening of the Light", local: "明夷 Míng Yí",
        upper: Kun, lower: Li,
        judgment: "Darkening of the light. In adversity it furthers one to be persevering.",
        image: "The light has sunk into the earth; the superior person veils their light, yet still shines.",
        explanation: "The sun below the earth: a time when the wise must hide their brightness.",
        revelation: "Circumstances are hostile to open virtue.",
        guidance: "Keep your inner light while appearing compliant outwardly.",
        lines: [
            ("Darkening of the light during flight. He lowers his wings.", "Withdraw even at a cost."),
            ("Darkening of the light injures him in the left thigh. He gives aid with the strength of a horse.", "Hurt, yet still able to help."),
            ("Darkening of the light during the hunt in the south. Their great leader is captured.", "Do not rush to correct long-standing ills."),
            ("He penetrates the left side of the belly. One gets at the very heart of the darkening of the light.", "Understanding the darkness, you may leave."),
            ("Darkening of the light as with Prince Chi. Perseverance furthers.", "Conceal your light to survive."),
            ("Not light but darkness. First he climbed up to heaven, then he plunged into the depths of the earth.", "Darkness destroys itself."),
        ],
    },
    hexagram! {
        id: 37, key: "101011", name: "The Family", local: "家人 Jiā Rén",
        upper: Xun, lower: Li,
        judgment: "The family. The perseverance of the woman furthers.",
        image: "Wind comes forth from fire; the superior person has substance in words and duration in way of life.",
        explanation: "Warmth within spreads outward: order begins in the household.",
        revelation: "Your influence starts with those closest to you.",
        guidance: "Clarify roles, keep your word, and lead by example at home.",
        lines: [
            ("Firm seclusion within the family. Remorse disappears.", "Set rules early."),
            ("She should not follow her whims. She must attend within to the food.", "Care for the essentials."),
            ("When tempers flare up in the family, too great severity brings remorse.", "Strictness is better than laxity, but not cruelty."),
            ("She is the treasure of the house. Great good fortune.", "Good stewardship brings wealth."),
            ("As a king he approaches his family. Fear not.", "Lead through love, not fear."),
            ("His work commands respect. In the end good fortune comes.", "Responsibility earned by character."),
        ],
    },
    hexagram! {
        id: 38, key: "110101", name: "Opposition", local: "睽 Kuí",
        upper: Li, lower: Dui,
        judgment: "Opposition. In small matters, good fortune.",
        image: "Above, fire; below, the lake; amid all fellowship the superior person retains individuality.",
        explanation: "Fire rises, water sinks: estrangement and divergent aims.",
        revelation: "Differences are real, yet small cooperation is still possible.",
        guidance: "Do not force agreement; work within small shared areas.",
        lines: [
            ("Remorse disappears. If you lose your horse, do not run after it; it will come back of its own accord.", "Do not chase what has left."),
            ("One meets his lord in a narrow street. No blame.", "Chance encounters resolve misunderstandings."),
            ("One sees the wagon dragged back, the oxen halted. Not a good beginning, but a good end.", "Stand by what is right despite setbacks."),
            ("Isolated through opposition, one meets a like-minded man with whom one can associate in good faith.", "A kindred spirit appears."),
            ("Remorse disappears. The companion bites his way through the wrappings. If one goes to him, how could it be a mistake?", "Recognize a sincere ally."),
            ("Isolated through opposition, one sees one's companion as a pig covered with dirt.", "Suspicion distorts reality; let it go."),
        ],
    },
    hexagram! {
        id: 39, key: "001010", name: "Obstruction", local: "蹇 Jiǎn",
        upper: Kan, lower: Gen,
        judgment: "Obstruction. The southwest furthers. The northeast does not further. It furthers one to see the great person.",
        image: "Water on the mountain; the superior person turns their attention to themself and molds their character.",
        explanation: "Danger ahead, a mountain behind: blocked in both directions.",
        revelation: "The obstacle is a call to self-examination.",
        guidance: "Pause, seek allies, and work on yourself before advancing.",
        lines: [
            ("Going leads to obstructions, coming meets with praise.", "Wait for the right time."),
            ("The king's servant is beset by obstruction upon obstruction, but it is not his own fault.", "Serve duty even when blocked."),
            ("Going leads to obstructions; hence he comes back.", "Return to those who depend on you."),
            ("Going leads to obstructions, coming leads to union.", "Gather strength with companions."),
            ("In the midst of the greatest obstructions, friends come.", "Leadership attracts help."),
            ("Going leads to obstructions, coming leads to great good fortune.", "Stay engaged; you are needed."),
        ],
    },
    hexagram! {
        id: 40, key: "010100", name: "Deliverance", local: "解 Xiè",
        upper: Zhen, lower: Kan,
        judgment: "Deliverance. The southwest furthers. If there is no longer anything where one has to go, return brings good fortune.",
        image: "Thunder and rain set in; the superior person pardons mistakes and forgives misdeeds.",
        explanation: "Tension releases like a storm clearing the air.",
        revelation: "The knot is loosening; relief is possible.",
        guidance: "Settle matters quickly, forgive, and return to normal life.",
        lines: [
            ("Without blame.", "Keep quiet while recovering."),
            ("One kills three foxes in the field and receives a yellow arrow.", "Remove deceit with honest means."),
            ("If a man carries a burden on his back and nonetheless rides in a carriage, he thereby encourages robbers.", "Do not flaunt what you have not earned."),
            ("Deliver yourself from your great toe. Then the companion comes.", "Drop parasitic ties."),
            ("If only the superior man can deliver himself, it brings good fortune.", "Inner resolve frees you."),
            ("The prince shoots at a hawk on a high wall. He kills it. Everything serves to further.", "Remove the final obstacle decisively."),
        ],
    },
    hexagram! {
        id: 41, key: "110001", name: "Decrease", local: "損 Sǔn",
        upper: Gen, lower: Dui,
        judgment: "Decrease combined with sincerity brings about supreme good fortune. How is this to be carried out? One may use two small bowls for the sacrifice.",
        image: "At the foot of the mountain, the lake; the superior person controls anger and restrains instincts.",
        explanation: "The lower gives to the higher: a time of reduction and simplicity.",
        revelation: "Less is sufficient if given sincerely.",
        guidance: "Simplify, restrain excess, and invest in what matters.",
        lines: [
            ("Going quickly when one's tasks are finished is without blame.", "Help without drawing attention."),
            ("Perseverance furthers. To undertake something brings misfortune.", "Help others without losing yourself."),
            ("When three people journey together, their number decreases by one. When one man journeys alone, he finds a companion.", "Pairs form naturally."),
            ("If a man decreases his faults, it makes the other hasten to come and rejoice.", "Improve yourself to attract help."),
            ("Someone does indeed increase him. Ten pairs of tortoises cannot oppose it.", "Fortune is destined; accept it."),
            ("If one is increased without depriving others, there is no blame.", "Gain that benefits all."),
        ],
    },
    hexagram! {
        id: 42, key: "100011", name: "Increase", local: "益 Yì",
        upper: Xun, lower: Zhen,
        judgment: "Increase. It furthers one to undertake something. It furthers one to cross the great water.",
        image: "Wind and thunder; the superior person who sees good imitates it, and who has faults rids themself of them.",
        explanation: "The higher gives to the lower: a time of growth and benefit.",
        revelation: "This is an expanding moment; use it.",
        guidance: "Act boldly for the common good and correct your faults.",
        lines: [
            ("It furthers one to accomplish great deeds. Supreme good fortune. No blame.", "Use help to do something great."),
            ("Someone does indeed increase him; ten pairs of tortoises cannot oppose it.", "Deserved blessing flows in."),
            ("One is enriched through unfortunate events. No blame, if you are sincere.", "Hardship can strengthen."),
            ("If you walk in the middle and report to the prince, he will follow.", "Mediate faithfully."),
            ("If in truth you have a kind heart, ask not. Supreme good fortune.", "Genuine kindness is recognized."),
            ("He brings increase to no one. Indeed, someone even strikes him.", "Selfishness invites attack."),
        ],
    },
    hexagram! {
        id: 43, key: "111110", name: "Breakthrough", local: "夬 Guài",
        upper: Dui, lower: Qian,
        judgment: "Breakthrough. One must resolutely make the matter known at the court of the king. It must be announced truthfully. Danger.",
        image: "The lake has risen up to heaven; the superior person dispenses riches downward and refrains from resting on virtue.",
        explanation: "Five yang push out the last yin: a decisive break.",
        revelation: "A long tension is about to release.",
        guidance: "Act resolutely, declare your position openly, and avoid violence.",
        lines: [
            ("Mighty in the forward-striding toes. When one goes and is not equal to the task, one makes a mistake.", "Measure your strength first."),
            ("A cry of alarm. Arms at evening and at night. Fear nothing.", "Vigilance makes you secure."),
            ("To be powerful in the cheekbones brings misfortune.", "Stay steady though misunderstood."),
            ("There is no skin on his thighs, and walking comes hard.", "Stubbornness blocks progress."),
            ("In dealing with weeds, firm resolution is necessary.", "Persist without wavering."),
            ("No cry. In the end misfortune comes.", "Do not ignore the last remnant."),
        ],
    },
    hexagram! {
        id: 44, key: "011111", name: "Coming to Meet", local: "姤 Gòu",
        upper: Qian, lower: Xun,
        judgment: "Coming to meet. The maiden is powerful. One should not marry such a maiden.",
        image: "Under heaven, wind; the prince acts when disseminating commands and proclaiming them to the four quarters.",
        explanation: "A single yin enters from below: an unexpected, seductive influence.",
        revelation: "Something tempting is arriving; it may overwhelm if welcomed carelessly.",
        guidance: "Meet it, but keep it in its proper place.",
        lines: [
            ("It must be checked with a brake of bronze.", "Check harmful influences early."),
            ("There is a fish in the tank. No blame.", "Contain the influence gently."),
            ("There is no skin on his thighs, and walking comes hard.", "Temptation thwarted; reflect."),
            ("No fish in the tank. This leads to misfortune.", "Keep in touch with ordinary people."),
            ("A melon covered with willow leaves. Hidden lines.", "Let things ripen unseen."),
            ("He comes to meet with his horns. Humiliation. No blame.", "Withdraw from the fray proudly."),
        ],
    },
    hexagram! {
        id: 45, key: "000110", name: "Gathering Together", local: "萃 Cuì",
        upper: Dui, lower: Kun,
        judgment: "Gathering together. Success. The king approaches his temple. It furthers one to see the great person.",
        image: "Over the earth, the lake; the superior person renews their weapons to meet the unforeseen.",
        explanation: "Waters collect in the lake: people assemble around a center.",
        revelation: "Collective effort has a chance to succeed now.",
        guidance: "Gather around a worthy purpose and prepare for surprises.",
        lines: [
            ("If you are sincere, but not to the end, there will sometimes be confusion, sometimes gathering together.", "Stay constant in commitment."),
            ("Letting oneself be drawn brings good fortune and remains blameless.", "Follow the inner pull."),
            ("Gathering together amid sighs. Nothing that would further.", "Join even when welcome is slow."),
            ("Great good fortune. No blame.", "Gathering for the common good."),
            ("If in gathering together one has position, this brings no blame.", "Position needs sincere trust."),
            ("Lamenting and sighing, floods of tears. No blame.", "Sincere regret restores fellowship."),
        ],
    },
    hexagram! {
        id: 46, key: "011000", name: "Pushing Upward", local: "升 Shēng",
        upper: Kun, lower: Xun,
        judgment: "Pushing upward has supreme success. One must see the great person. Fear not. Departure toward the south brings good fortune.",
        image: "Within the earth, wood grows; the superior person heaps up small things to achieve something high and great.",
        explanation: "A sapling pushing up through soil: steady, effortful ascent.",
        revelation: "Gradual effort will raise you higher.",
        guidance: "Keep growing one step at a time; seek guidance from above.",
        lines: [
            ("Pushing upward that meets with confidence brings great good fortune.", "You are welcomed upward."),
            ("If one is sincere, it furthers one to bring even a small offering.", "Small but sincere effort counts."),
            ("One pushes upward into an empty city.", "The way is open; proceed without doubt."),
            ("The king offers him Mount Chi. Good fortune. No blame.", "Recognition and responsibility."),
            ("Perseverance brings good fortune. One pushes upward by steps.", "Do not skip stages."),
            ("Pushing upward in darkness. It furthers one to be unremittingly persevering.", "Blind ambition exhausts; stay conscious."),
        ],
    },
    hexagram! {
        id: 47, key: "010110", name: "Oppression", local: "困 Kùn",
        upper: Dui, lower: Kan,
        judgment: "Oppression. Success. Perseverance. The great person brings about good fortune. When one has something to say, it is not believed.",
        image: "There is no water in the lake; the superior person stakes their life on following their will.",
        explanation: "The lake drained: exhaustion and confinement.",
        revelation: "Your resources are depleted, but your spirit need not be.",
        guidance: "Speak little, endure, and keep your inner resolve.",
        lines: [
            ("One sits oppressed under a bare tree and strays into a gloomy valley.", "Do not sink into melancholy."),
            ("One is oppressed while at meat and drink. The man with the scarlet knee bands is just coming.", "Help is on its way; wait."),
            ("A man permits himself to be oppressed by stone, and leans on thorns and thistles.", "Restlessness worsens distress."),
            ("He comes very quietly, oppressed in a golden carriage. Humiliation, but the end is reached.", "Wealth delays help, but it comes."),
            ("His nose and feet are cut off. Oppression at the hands of the man with the purple knee bands.", "Patience as things slowly improve."),
            ("He is oppressed by creeping vines. He moves uncertainly and says, 'Movement brings remorse.'", "Decide and the bonds fall away."),
        ],
    },
    hexagram! {
        id: 48, key: "011010", name: "The Well", local: "井 Jǐng",
        upper: Kan, lower: Xun,
        judgment: "The well. The town may be changed, but the well cannot be changed. It neither decreases nor increases.",
        image: "Water over wood; the superior person encourages the people at their work and exhorts them to help one another.",
        explanation: "An unchanging source that nourishes all who draw from it.",
        revelation: "The deep source is there; what matters is how you reach it.",
        guidance: "Maintain your rope and your bucket: tend the means of access.",
        lines: [
            ("One does not drink the mud of the well. No animals come to an old well.", "Neglect leaves you unused."),
            ("At the wellhole one shoots fishes. The jug is broken and leaks.", "Talent wasted on trifles."),
            ("The well is cleaned, but no one drinks from it. This is my heart's sorrow.", "Ability unrecognized; hope."),
            ("The well is being lined. No blame.", "Time for inner repair."),
            ("In the well there is a clear, cold spring from which one can drink.", "A true source of good."),
            ("One draws from the well without hindrance. It is dependable. Supreme good fortune.", "Nourishment flows to all."),
        ],
    },
    hexagram! {
        id: 49, key: "101110", name: "Revolution", local: "革 Gé",
        upper: Dui, lower: Li,
        judgment: "Revolution. On your own day you are believed. Supreme success, furthering through perseverance. Remorse disappears.",
        image: "Fire in the lake; the superior person sets the calendar in order and makes the seasons clear.",
        explanation: "Fire and water in conflict: the old form must be molted.",
        revelation: "A fundamental change is due, and its time is near.",
        guidance: "Change only when necessary, with clear reasons, at the right time.",
        lines: [
            ("Wrapped in the hide of a yellow cow.", "Do not act prematurely."),
            ("When one's own day comes, one may create revolution.", "Prepare, then act."),
            ("Starting brings misfortune. When talk of revolution has gone the rounds three times, one may commit himself.", "Weigh complaints carefully."),
            ("Remorse disappears. Men believe him. Changing the form of government brings good fortune.", "Change grounded in truth succeeds."),
            ("The great man changes like a tiger. Even before he questions the oracle he is believed.", "Clear vision convinces."),
            ("The superior man changes like a panther. The inferior man molts in the face.", "Settle changes; stop pushing."),
        ],
    },
    hexagram! {
        id: 50, key: "011101", name: "The Cauldron", local: "鼎 Dǐng",
        upper: Li, lower: Xun,
        judgment: "The cauldron. Supreme good fortune. Success.",
        image: "Fire over wood; the superior person consolidates their fate by making their position correct.",
        explanation: "A sacred vessel transforming raw into refined.",
        revelation: "Culture, nourishment, and higher purpose align now.",
        guidance: "Refine what you have and place it in service of something greater.",
        lines: [
            ("A cauldron with legs upturned. Furthers removal of stagnating stuff.", "Clear out before you begin."),
            ("There is food in the cauldron. My comrades are envious, but they cannot harm me.", "Achievement draws envy; stay focused."),
            ("The handle of the cauldron is altered. One is impeded in his way of life.", "Unrecognized ability; stay true."),
            ("The legs of the cauldron are broken. The prince's meal is spilled.", "Overreaching spoils the work."),
            ("The cauldron has yellow handles, golden carrying rings.", "Modest and accessible, you attract help."),
            ("The cauldron has rings of jade. Great good fortune.", "Hardness balanced with gentleness."),
        ],
    },
    hexagram! {
        id: 51, key: "100100", name: "The Arousing", local: "震 Zhèn",
        upper: Zhen, lower: Zhen,
        judgment: "Shock brings success. Shock comes; oh, oh! Laughing words; ha, ha! The shock terrifies for a hundred miles, and he does not let fall the sacrificial spoon.",
        image: "Thunder repeated; the superior person sets their life in order and examines themself.",
        explanation: "Thunder upon thunder: sudden shock that awakens.",
        revelation: "A jolt is coming or has come; it carries a lesson.",
        guidance: "Stay composed in the shock and use it to examine yourself.",
        lines: [
            ("Shock comes; oh, oh! Then follow laughing words; ha, ha! Good fortune.", "Fear gives way to relief."),
            ("Shock comes bringing danger. A hundred thousand times you lose your treasures.", "Let go of losses; they return."),
            ("Shock comes and makes one distraught. If shock spurs to action, one remains free of misfortune.", "Use the jolt to act."),
            ("Shock is mired.", "Shock without response goes nowhere."),
            ("Shock goes hither and thither. Danger. However, nothing at all is lost.", "Stay centered amid repeated shocks."),
            ("Shock brings ruin and terrified gazing around. Going ahead brings misfortune.", "Withdraw before panic spreads."),
        ],
    },
    hexagram! {
        id: 52, key: "001001", name: "Keeping Still", local: "艮 Gèn",
        upper: Gen, lower: Gen,
        judgment: "Keeping still. Keeping his back still so that he no longer feels his body. No blame.",
        image: "Mountains standing close together; the superior person does not permit thoughts to go beyond their situation.",
        explanation: "Mountain upon mountain: rest and the stilling of desire.",
        revelation: "Inner quiet will show you what action cannot.",
        guidance: "Stop at the right place and quiet your mind.",
        lines: [
            ("Keeping his toes still. No blame.", "Stop before you start wrongly."),
            ("Keeping his calves still. He cannot rescue him whom he follows.", "You cannot stop what you follow."),
            ("Keeping his hips still. Making his sacrum stiff. Dangerous.", "Forced stillness is harmful."),
            ("Keeping his trunk still. No blame.", "Calm the self, though not yet fully."),
            ("Keeping his jaws still. The words have order.", "Speak with care."),
            ("Noblehearted keeping still. Good fortune.", "Tranquility achieved."),
        ],
    },
    hexagram! {
        id: 53, key: "001011", name: "Development", local: "漸 Jiàn",
        upper: Xun, lower: Gen,
        judgment: "Development. The maiden is given in marriage. Good fortune. Perseverance furthers.",
        image: "On the mountain, a tree; the superior person abides in dignity and virtue to improve the mores.",
        explanation: "A tree growing slowly on a mountain: gradual, rooted progress.",
        revelation: "Progress will come step by step, not by leaps.",
        guidance: "Follow due process and let things develop at their pace.",
        lines: [
            ("The wild goose gradually draws near the shore. The young son is in danger.", "Early steps draw criticism; persist."),
            ("The wild goose gradually draws near the cliff. Eating and drinking in peace and concord.", "Secure footing; share it."),
            ("The wild goose gradually draws near the plateau. The man goes forth and does not return.", "Do not force progress."),
            ("The wild goose gradually draws near the tree. Perhaps it will find a flat branch. No blame.", "Find a safe perch for now."),
            ("The wild goose gradually draws near the summit. For three years the woman has no child.", "Misunderstanding gives way in the end."),
            ("The wild goose gradually draws near the cloud heights. Its feathers can be used for the sacred dance.", "Your example inspires."),
        ],
    },
    hexagram! {
        id: 54, key: "110100", name: "The Marrying Maiden", local: "歸妹 Guī Mèi",
        upper: Zhen, lower: Dui,
        judgment: "The marrying maiden. Undertakings bring misfortune. Nothing that would further.",
        image: "Thunder over the lake; the superior person understands the transitory in the light of the eternity of the end.",
        explanation: "Joy moved by impulse: a relationship entered from a subordinate position.",
        revelation: "Your position is not one of full choice.",
        guidance: "Act with tact and keep the long view.",
        lines: [
            ("The marrying maiden as a concubine. A lame man who is able to tread. Undertakings bring good fortune.", "Work within your limited role."),
            ("A one-eyed man who is able to see. The perseverance of a solitary man furthers.", "Remain loyal despite disappointment."),
            ("The marrying maiden as a slave. She marries as a concubine.", "Do not trade dignity for position."),
            ("The marrying maiden draws out the allotted time. A late marriage comes in due course.", "Wait for the right match."),
            ("The sovereign gave his daughter in marriage. The embroidered garments of the princess were not as gorgeous as those of the serving maid.", "Inner worth over show."),
            ("The woman holds the basket, but there are no fruits in it.", "Form without substance."),
        ],
    },
    hexagram! {
        id: 55, key: "101100", name: "Abundance", local: "豐 Fēng",
        upper: Zhen, lower: Li,
        judgment: "Abundance has success. The king attains abundance. Be not sad. Be like the sun at midday.",
        image: "Both thunder and lightning come; the superior person decides lawsuits and carries out punishments.",
        explanation: "Clarity and movement together: a peak of fullness.",
        revelation: "You stand at a high point that will not last forever.",
        guidance: "Act fully now without grieving its passing.",
        lines: [
            ("When a man meets his destined ruler, they can be together ten days, and it is not a mistake.", "Partner with a complementary spirit."),
            ("The curtain is of such fullness that the polestars can be seen at noon.", "Remain sincere though obscured."),
            ("The underbrush is of such abundance that the small stars can be seen at noon. He breaks his right arm.", "Hindered, yet blameless."),
            ("The curtain is of such fullness that the polestars can be seen at noon. He meets his ruler, who is of like kind.", "Find allies to act with."),
            ("Lines are coming; blessing and fame draw near.", "Welcome good counsel."),
            ("His house is in a state of abundance. He screens off his family.", "Arrogance leads to isolation."),
        ],
    },
    hexagram! {
        id: 56, key: "001101", name: "The Wanderer", local: "旅 Lǚ",
        upper: Li, lower: Gen,
        judgment: "The wanderer. Success through smallness. Perseverance brings good fortune to the wanderer.",
        image: "Fire on the mountain; the superior person is clear-minded and cautious in imposing penalties, and protracts no lawsuits.",
        explanation: "Fire moves across a still mountain: the stranger passing through.",
        revelation: "You are away from familiar ground and must behave accordingly.",
        guidance: "Be modest, courteous, and cautious; keep to good company.",
        lines: [
            ("If the wanderer busies himself with trivial things, he draws down misfortune upon himself.", "Keep your dignity on the road."),
            ("The wanderer comes to an inn. He has his property with him. He wins the steadfastness of a young servant.", "Reserve wins loyal help."),
            ("The wanderer's inn burns down. He loses the steadfastness of his young servant. Danger.", "Arrogance loses your refuge."),
            ("The wanderer rests in a shelter. He obtains his property and an ax. My heart is not glad.", "Settled, yet still on guard."),
            ("He shoots a pheasant. It drops with the first arrow. In the end this brings both praise and office.", "The right approach gains acceptance."),
            ("The bird's nest burns up. The wanderer laughs at first, then must needs lament and weep.", "Carelessness costs your home."),
        ],
    },
    hexagram! {
        id: 57, key: "011011", name: "The Gentle", local: "巽 Xùn",
        upper: Xun, lower: Xun,
        judgment: "The gentle. Success through what is small. It furthers one to have somewhere to go. It furthers one to see the great person.",
        image: "Winds following one upon the other; the superior person spreads their commands abroad and carries out their undertakings.",
        explanation: "Wind upon wind: gentle, penetrating, persistent influence.",
        revelation: "Steady gentle pressure will accomplish what force cannot.",
        guidance: "Persist quietly in one direction with a clear goal.",
        lines: [
            ("In advancing and in retreating, the perseverance of a warrior furthers.", "Decide and hold to it."),
            ("Penetration under the bed. Priests and magicians are used in great number.", "Uncover hidden influences."),
            ("Repeated penetration. Humiliation.", "Too much deliberation stalls action."),
            ("Remorse vanishes. During the hunt three kinds of game are caught.", "Modest effort brings rich results."),
            ("No beginning, but an end. Before the change, three days. After the change, three days.", "Plan changes and review them."),
            ("Penetration under the bed. He loses his property and his ax.", "Over-probing weakens you."),
        ],
    },
    hexagram! {
        id: 58, key: "110110", name: "The Joyous", local: "兌 Duì",
        upper: Dui, lower: Dui,
        judgment: "The joyous. Success. Perseverance is favorable.",
        image: "Lakes resting one on the other; the superior person joins with friends for discussion and practice.",
        explanation: "Lake upon lake: joy shared and renewed through exchange.",
        revelation: "Joy and good company support your aim.",
        guidance: "Share pleasure honestly; avoid empty amusement.",
        lines: [
            ("Contented joyousness. Good fortune.", "Quiet contentment."),
            ("Sincere joyousness. Good fortune. Remorse disappears.", "Joy from integrity."),
            ("Coming joyousness. Misfortune.", "Seeking distraction outside fails."),
            ("Joyousness that is weighed is not at peace. After ridding himself of mistakes a man has joy.", "Choose higher joys."),
            ("Sincerity toward disintegrating influences is dangerous.", "Beware of corrupting company."),
            ("Seductive joyousness.", "Vanity draws you astray."),
        ],
    },
    hexagram! {
        id: 59, key: "010011", name: "Dispersion", local: "渙 Huàn",
        upper: Xun, lower: Kan,
        judgment: "Dispersion. Success. The king approaches his temple. It furthers one to cross the great water.",
        image: "The wind drives over the water; the kings of old sacrificed to the Lord and built temples.",
        explanation: "Wind over water scatters ice: dissolving rigidity and division.",
        revelation: "Hardness and separation can be melted now.",
        guidance: "Overcome egotism and reunite around shared values.",
        lines: [
            ("He brings help with the strength of a horse. Good fortune.", "Act early to stop division."),
            ("At the dissolution he hurries to that which supports him. Remorse disappears.", "Seek a source of balance."),
            ("He dissolves his self. No remorse.", "Put the task above yourself."),
            ("He dissolves his bond with his group. Supreme good fortune.", "Rise above faction."),
            ("His loud cries are as dissolving as sweat. Dissolution! A king abides without blame.", "A unifying idea restores order."),
            ("He dissolves his blood. Departing, keeping at a distance, going out, is without blame.", "Remove danger for yourself and others."),
        ],
    },
    hexagram! {
        id: 60, key: "110010", name: "Limitation", local: "節 Jié",
        upper: Kan, lower: Dui,
        judgment: "Limitation. Success. Galling limitation must not be persevered in.",
        image: "Water over the lake; the superior person creates number and measure and examines the nature of virtue.",
        explanation: "The lake holds water within its banks: measure and boundaries.",
        revelation: "Limits give shape to your freedom.",
        guidance: "Set sensible limits, but not ones so harsh they break.",
        lines: [
            ("Not going out of the door and the courtyard is without blame.", "Know when to hold back."),
            ("Not going out of the gate and the courtyard brings misfortune.", "Excess caution misses the moment."),
            ("He who knows no limitation will have cause to lament. No blame.", "Extravagance brings regret."),
            ("Contented limitation. Success.", "Accept natural limits."),
            ("Sweet limitation brings good fortune. Going brings esteem.", "Limit yourself first."),
            ("Galling limitation. Perseverance brings misfortune. Remorse disappears.", "Severity can be needed, but is costly."),
        ],
    },
    hexagram! {
        id: 61, key: "110011", name: "Inner Truth", local: "中孚 Zhōng Fú",
        upper: Xun, lower: Dui,
        judgment: "Inner truth. Pigs and fishes. Good fortune. It furthers one to cross the great water.",
        image: "Wind over the lake; the superior person discusses criminal cases in order to delay executions.",
        explanation: "An empty center: openness through which truth can pass.",
        revelation: "Sincerity reaches even the hardest to influence.",
        guidance: "Approach others without prejudice and act from inner truth.",
        lines: [
            ("Being prepared brings good fortune. If there are secret designs, it is disquieting.", "Keep your own center."),
            ("A crane calling in the shade. Its young answers it.", "Sincerity resonates."),
            ("He finds a comrade. Now he beats the drum, now he stops. Now he sobs, now he sings.", "Dependence on others makes you sway."),
            ("The moon nearly at the full. The team horse goes astray. No blame.", "Turn toward the higher source."),
            ("He possesses truth, which links together. No blame.", "A leader's sincerity unites."),
            ("Cockcrow penetrating to heaven. Perseverance brings misfortune.", "Words beyond substance fail."),
        ],
    },
    hexagram! {
        id: 62, key: "001100", name: "Preponderance of the Small", local: "小過 Xiǎo Guò",
        upper: Zhen, lower: Gen,
        judgment: "Preponderance of the small. Success. Perseverance furthers. Small things may be done; great things should not be done.",
        image: "Thunder on the mountain; in conduct the superior person gives preponderance to reverence.",
        explanation: "The small exceeds: a time for modest, careful acts.",
        revelation: "This is not the moment for grand ambitions.",
        guidance: "Be conscientious in small matters and stay low.",
        lines: [
            ("The bird meets with misfortune through flying.", "Do not take flight too early."),
            ("She passes by her ancestor and meets her ancestress. He does not reach his prince and meets the official.", "Accept a modest role."),
            ("If one is not extremely careful, somebody may come up from behind and strike him.", "Guard against hidden risk."),
            ("No blame. He meets him without passing by. Going brings danger.", "Hold back and stay alert."),
            ("Dense clouds, no rain from our western territory.", "Seek capable help for the task."),
            ("He passes him by, not meeting him. The flying bird leaves him.", "Overreaching brings misfortune."),
        ],
    },
    hexagram! {
        id: 63, key: "101010", name: "After Completion", local: "既濟 Jì Jì",
        upper: Kan, lower: Li,
        judgment: "After completion. Success in small matters. Perseverance furthers. At the beginning good fortune, at the end disorder.",
        image: "Water over fire; the superior person takes thought of misfortune and arms themself against it in advance.",
        explanation: "Every line in its proper place: a state of perfect but fragile balance.",
        revelation: "The goal has been reached; decline lurks in complacency.",
        guidance: "Guard what is achieved and watch the details.",
        lines: [
            ("He brakes his wheels. He gets his tail in the water. No blame.", "Resist being swept along."),
            ("The woman loses the curtain of her carriage. Do not run after it; on the seventh day you will get it.", "What is yours returns."),
            ("The Illustrious Ancestor disciplines the Devil's Country. After three years he conquers it.", "Expansion is costly; choose wisely."),
            ("The finest clothes turn to rags. Be careful all day long.", "Watch for small leaks."),
            ("The neighbor in the east who slaughters an ox does not attain as much real happiness as the neighbor in the west with his small offering.", "Sincerity beats display."),
            ("He gets his head in the water. Danger.", "Do not look back once across."),
        ],
    },
    hexagram! {
        id: 64, key: "010101", name: "Before Completion", local: "未濟 Wèi Jì",
        upper: Li, lower: Kan,
        judgment: "Before completion. Success. But if the little fox, after nearly completing the crossing, gets his tail in the water, there is nothing that would further.",
        image: "Fire over water; the superior person is careful in the differentiation of things, so that each finds its place.",
        explanation: "No line in its proper place: the transition from chaos toward order.",
        revelation: "The work is close to done but not finished.",
        guidance: "Proceed with care and put each thing in its place.",
        lines: [
            ("He gets his tail in the water. Humiliating.", "Do not rush ahead unprepared."),
            ("He brakes his wheels. Perseverance brings good fortune.", "Wait, with readiness."),
            ("Before completion, attack brings misfortune. It furthers one to cross the great water.", "Change tactics; bring in help."),
            ("Perseverance brings good fortune. Remorse disappears. Shock, thus to discipline the Devil's Country.", "Decisive struggle now."),
            ("Perseverance brings good fortune. No remorse. The light of the superior person is true.", "Victory is secured."),
            ("There is drinking of wine in genuine confidence. No blame. But if one wets his head, he loses it, in truth.", "Celebrate without excess."),
        ],
    },
];
