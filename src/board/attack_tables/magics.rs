//! Magic multipliers for the sliding attack tables, one per square.

#[rustfmt::skip]
pub(super) const ROOK_MAGICS: [u64; 64] = [
    0x00800040098460b1, 0x0140200040001000, 0x0080100020008008, 0x0900059001006008,
    0x8200080201100420, 0x4200085042000104, 0x0880010010800a00, 0x0200005080220401,
    0x0022800040048031, 0x4001804000802000, 0x0800802000100082, 0x0040801000080080,
    0x0020800800040080, 0x8000800400800200, 0xa021000200040100, 0x2002000100a04402,
    0x0000808000400020, 0xc000404000201008, 0x0080410020081100, 0x0004848010000800,
    0x0044808004020800, 0x0204004002010040, 0x60000400584d2210, 0x0006020000511084,
    0x2880c00180018020, 0x0040002020100800, 0x0000200480100180, 0x4008408a00211200,
    0x0a200801800c0080, 0x0000040080020080, 0x1804040101000200, 0x150101020020409c,
    0x0000804010800020, 0x0200201002400040, 0x2030080020200400, 0x0112081042002200,
    0x0018008008800402, 0x8000800400800200, 0x1001024814000110, 0x900001184200108c,
    0x0242802040128008, 0x0510004020044000, 0x0410002000410100, 0x0201006010030008,
    0x0028080005010010, 0x0400020004008080, 0x0000111008440022, 0x010015842a420001,
    0x4080208000400080, 0x0001108020400100, 0x0024c09100200500, 0x4308008008100080,
    0x0180080080040080, 0x2001000208040100, 0x0082000408810200, 0x0008800241000180,
    0x2602001022408302, 0x2085a1c082011302, 0x0002208010400a02, 0x2000100100042009,
    0x0c02000810200402, 0x010e004801100442, 0x828088311002820c, 0x0000084410228102,
];

#[rustfmt::skip]
pub(super) const BISHOP_MAGICS: [u64; 64] = [
    0x0028204102060010, 0x0182903242004000, 0x0204180200411820, 0x8044104210082040,
    0x0104042290203001, 0xc442080404042180, 0x4262080442090821, 0x2220220202200200,
    0x0000100208085484, 0x6280220421021210, 0x0000688084008860, 0x8000082043400080,
    0x350a020210080008, 0x000022020320a100, 0x002204040202d088, 0x3100004402080304,
    0x0820818882100230, 0x0020188808010060, 0x00110028080d0010, 0x0000c04c04018088,
    0x4004000480a04200, 0x0000201210042000, 0x0084002041441084, 0x000040010400d404,
    0x2802080250909050, 0x00680bc818020800, 0x0808020820520440, 0x0802040008010821,
    0x8802040002008208, 0x4008004082004211, 0xa082008000480822, 0x6004003000420208,
    0x4601082040400400, 0x002084050a101000, 0x800a002201100090, 0x0084020084080080,
    0x0001100400008020, 0x0870088820260200, 0x1008080090406600, 0x0401040101003100,
    0x0004100804100800, 0x1400881188001008, 0x254100110c801000, 0x2002060216000401,
    0x2120a10212020400, 0x0001521082020100, 0x202044b082004c80, 0x000a02042b000c20,
    0x0810841128400011, 0x320a228848080500, 0x2000004210901000, 0x00280501840c2000,
    0x0020002004240000, 0x00021221548b0050, 0x4004080851040001, 0x0190104901002280,
    0x4101404210500200, 0x2b0050804808a424, 0x000501830080d000, 0x0040208019084800,
    0x0028003811820200, 0x20200010a0014108, 0x0414401004410044, 0x040a8807380a0040,
];
