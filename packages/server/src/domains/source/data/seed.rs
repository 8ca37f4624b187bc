//! Provisioning list of the central-government recruitment boards.

/// A board to register at provisioning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSeed {
    pub name: &'static str,
    pub url: &'static str,
}

const fn seed(name: &'static str, url: &'static str) -> SourceSeed {
    SourceSeed { name, url }
}

pub const MINISTRY_SOURCES: &[SourceSeed] = &[
    seed("기획재정부", "https://www.moef.go.kr/nw/notice/emrc.do?menuNo=4050200"),
    seed("교육부", "https://www.moe.go.kr/boardCnts/listRenew.do?boardID=194&m=020602&s=moe"),
    seed("과학기술정보통신부", "https://www.msit.go.kr/bbs/list.do?sCode=user&mPid=121&mId=125"),
    seed("외교부", "https://www.mofa.go.kr/www/brd/m_4079/list.do"),
    seed("통일부", "https://www.unikorea.go.kr/unikorea/notify/recruit/"),
    seed("법무부", "https://www.moj.go.kr/moj/225/subview.do"),
    seed("국방부", "https://www.mnd.go.kr/user/boardList.action?boardId=I_26382&mcategoryId=&id=mnd_020403000000"),
    seed("행정안전부", "https://www.mois.go.kr/frt/bbs/type013/commonSelectBoardList.do?bbsId=BBSMSTR_000000000006"),
    seed("국가보훈부", "https://www.mpva.go.kr/mpva/selectBbsNttList.do?bbsNo=360&key=1801"),
    seed("문화체육관광부", "https://www.mcst.go.kr/kor/s_notice/notice/jobList.jsp"),
    seed("농림축산식품부", "https://www.mafra.go.kr/home/5111/subview.do?enc=Zm5jdDF8QEB8JTJGYmJzJTJGaG9tZSUyRjc5NCUyRmFydGNsTGlzdC5kbyUzRg%3D%3D"),
    seed("산업통상자원부", "https://www.motie.go.kr/kor/article/ATCL2527aa115"),
    seed("보건복지부", "https://www.mohw.go.kr/board.es?mid=a10501010400&bid=0003&cg_code=C02"),
    seed("환경부", "https://www.me.go.kr/home/web/index.do?menuId=10530"),
    seed("고용노동부", "https://www.moel.go.kr/news/notice/noticeList.do?searchDivCd=004"),
    seed("여성가족부", "https://www.mogef.go.kr/nw/ntc/nw_ntc_s001.do?div1=13&div3=10"),
    seed("국토교통부", "https://www.molit.go.kr/USR/BORD0201/m_81/BRD.jsp"),
    seed("인사혁신처", "https://www.mpm.go.kr/mpm/info/infoJobs/jobsBoard/?mode=list&boardId=bbs_0000000000000118&category=%EC%B1%84%EC%9A%A9"),
    seed("법제처", "https://www.moleg.go.kr/board.es?mid=a10504000000&bid=0010"),
    seed("식품의약품안전처", "https://www.nifds.go.kr/brd/m_22/list.do?page=1&srchFr=&srchTo=&srchWord=&srchTp=&itm_seq_1=0&itm_seq_2=0&multi_itm_seq=0&company_cd=&company_nm="),
    seed("공정거래위원회", "https://www.ftc.go.kr/www/selectBbsNttList.do?bordCd=4&key=14"),
    seed("국민권익위원회", "https://www.acrc.go.kr/board.es?mid=a10401020000&bid=2B"),
    seed("금융위원회", "https://www.fsc.go.kr/no010104"),
    seed("개인정보보호위원회", "https://www.pipc.go.kr/np/cop/bbs/selectBoardList.do?bbsId=BS208&mCode=C010020000"),
    seed("원자력안전위원회", "https://www.nssc.go.kr/ko/cms/FR_CON/index.do?MENU_ID=180"),
];
